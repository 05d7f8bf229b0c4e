//! Error types for logent-core.
//!
//! Structural problems with the input (an unknown column, a ragged row, an
//! empty symbol population) are surfaced to the caller. Data-quality problems
//! such as unparseable timestamps never reach this module: the normalizer
//! absorbs them as [`Value::Null`](crate::Value::Null).

use thiserror::Error;

/// Failures raised while reading or reshaping an [`EventLog`](crate::EventLog).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogError {
    /// A configured column name does not exist in the table.
    #[error("column {column:?} not found in event log (available: {available:?})")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    /// A pushed row does not match the table's column count.
    #[error("row {row} has {found} values but the event log has {expected} columns")]
    RowArity {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A record handed to [`EventLog::from_records`](crate::EventLog::from_records)
    /// was not a JSON object.
    #[error("record {index} is not a JSON object")]
    NotARecord { index: usize },
}

/// Failures raised by the entropy engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// No symbols reached the frequency count, so probabilities are undefined.
    #[error("symbol population is empty; entropy is undefined")]
    EmptyPopulation,
}

/// Top-level error for operations that touch both the table and the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Log(#[from] LogError),
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
