//! Normalizer — brings an event log into interval form with parsed timestamps.
//!
//! Steps, in order:
//!
//! 1. If the log carries a lifecycle-transition column, hand it to a
//!    [`LifecycleConverter`] and rename the converter's `START` / `END`
//!    columns to the canonical start and end timestamp columns.
//! 2. Coerce every present timestamp column cell by cell. Cells that cannot
//!    be read as a timestamp become [`Value::Null`].
//!
//! Rows are stored densely, so the output index is always `0..len`. Row order
//! is preserved except for whatever reordering the converter performs.
//! Running the normalizer on its own output changes nothing.

use crate::config::ColumnNames;
use crate::error::LogError;
use crate::timestamp::coerce_timestamp;
use crate::types::{EventLog, Value};
use tracing::debug;

/// Column the converter writes activity-instance start times to.
pub const START_COLUMN: &str = "START";
/// Column the converter writes activity-instance completion times to.
pub const END_COLUMN: &str = "END";

/// Turns a lifecycle log (separate start/complete rows) into an interval log
/// with one row per activity instance and [`START_COLUMN`] / [`END_COLUMN`]
/// columns.
pub trait LifecycleConverter {
    fn convert(&self, log: &EventLog) -> Result<EventLog, LogError>;
}

impl<F> LifecycleConverter for F
where
    F: Fn(&EventLog) -> Result<EventLog, LogError>,
{
    fn convert(&self, log: &EventLog) -> Result<EventLog, LogError> {
        self(log)
    }
}

/// Log normalizer bound to a lifecycle converter and a column schema.
#[derive(Debug, Clone)]
pub struct Normalizer<C> {
    converter: C,
    columns: ColumnNames,
}

impl<C: LifecycleConverter> Normalizer<C> {
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            columns: ColumnNames::default(),
        }
    }

    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    pub fn columns(&self) -> &ColumnNames {
        &self.columns
    }

    /// Normalize `log`. Only converter failures are returned as errors.
    pub fn convert_and_clean(&self, mut log: EventLog) -> Result<EventLog, LogError> {
        if log.has_column(&self.columns.lifecycle) {
            debug!(rows = log.len(), "lifecycle log detected; converting to intervals");
            log = self.converter.convert(&log)?;
            log.rename_columns(&[
                (START_COLUMN, self.columns.start_time.as_str()),
                (END_COLUMN, self.columns.end_time.as_str()),
            ]);
            debug!(instances = log.len(), "lifecycle conversion done");
        }

        for column in [&self.columns.start_time, &self.columns.end_time] {
            if !log.has_column(column) {
                continue;
            }
            let mut dropped = 0usize;
            log.map_column(column, |cell| {
                let was_null = cell.is_null();
                let out = coerce_timestamp(cell);
                if !was_null && out.is_null() {
                    dropped += 1;
                }
                out
            })?;
            if dropped > 0 {
                debug!(column = %column, dropped, "unparseable timestamps replaced with null");
            }
        }

        Ok(log)
    }
}

/// [`Normalizer::convert_and_clean`] with the default column schema.
pub fn convert_and_clean_with<C>(log: EventLog, converter: &C) -> Result<EventLog, LogError>
where
    C: LifecycleConverter + ?Sized,
{
    Normalizer::new(Borrowed(converter)).convert_and_clean(log)
}

struct Borrowed<'a, C: ?Sized>(&'a C);

impl<C: LifecycleConverter + ?Sized> LifecycleConverter for Borrowed<'_, C> {
    fn convert(&self, log: &EventLog) -> Result<EventLog, LogError> {
        self.0.convert(log)
    }
}

/// True when every cell of `column` is a parsed timestamp or `Null`.
pub fn is_clean_timestamp_column(log: &EventLog, column: &str) -> Result<bool, LogError> {
    Ok(log
        .column(column)?
        .all(|v| matches!(v, Value::Timestamp(_) | Value::Null)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
