//! logent — trace and prefix entropy for process-mining event logs.
//!
//! This crate re-exports the core library and wires the default lifecycle
//! converter into the normalizer, so that integration tests and callers need
//! a single import.
//!
//! # Architecture
//!
//! ```text
//! EventLog ──► convert_and_clean ──► cf_entropy_seq ──► SequenceEntropy
//!                     │
//!                     └──► StartCompletePairing (lifecycle logs only)
//! ```
//!
//! Input tables must already be in chronological order; sequences are read
//! top to bottom and nothing is re-sorted.

pub use logent_core::{config, entropy, error, normalizer, timestamp, types};
pub use logent_core::{
    case_sequences, cf_entropy_seq, compute_entropy, convert_and_clean_with, get_all_prefixes,
    prefix_entropy, symbol_frequencies, trace_entropy, ColumnNames, Config, EntropyError,
    EntropyOptions, Error, EventLog, LifecycleConverter, LogError, Normalizer, Perspective,
    Result, SequenceEntropy, Value,
};
pub use logent_lifecycle::{PairingColumns, StartCompletePairing};

/// Normalize `log` with the default schema and [`StartCompletePairing`].
///
/// Lifecycle logs are folded into one row per activity instance with
/// `start:timestamp` / `time:timestamp`; timestamp columns are parsed
/// non-strictly, unparseable cells becoming [`Value::Null`].
pub fn convert_and_clean(log: EventLog) -> std::result::Result<EventLog, LogError> {
    convert_and_clean_with(log, &StartCompletePairing::default())
}

/// A normalizer whose schema, and whose lifecycle pairing, follow `config`.
pub fn configured_normalizer(config: &Config) -> Normalizer<StartCompletePairing> {
    let pairing = StartCompletePairing::with_columns(PairingColumns::from(&config.columns));
    Normalizer::new(pairing).with_columns(config.columns.clone())
}
