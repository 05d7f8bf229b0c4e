//! logent-core — event-log entropy core library.
//!
//! This crate holds the table model, the normalizer and the entropy engine.
//! The lifecycle pairing collaborator lives in `logent-lifecycle`; the
//! `logent` facade wires the two together.
//!
//! # Pipeline
//!
//! ```text
//! EventLog ──► Normalizer ──► case_sequences ──► [prefixes] ──► entropy
//!                  │
//!                  └──► LifecycleConverter (lifecycle logs only)
//! ```
//!
//! Every operation is a synchronous, side-effect-free function of its inputs.

pub mod config;
pub mod entropy;
pub mod error;
pub mod normalizer;
pub mod timestamp;
pub mod types;

pub use config::{ColumnNames, Config, EntropyConfig};
pub use entropy::{
    case_sequences, cf_entropy_seq, compute_entropy, get_all_prefixes, prefix_entropy,
    symbol_frequencies, trace_entropy, EntropyOptions, Perspective, SequenceEntropy,
};
pub use error::{EntropyError, Error, LogError, Result};
pub use normalizer::{convert_and_clean_with, LifecycleConverter, Normalizer};
pub use types::{EventLog, Value};
