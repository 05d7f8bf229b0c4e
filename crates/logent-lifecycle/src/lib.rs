//! logent-lifecycle — lifecycle-to-interval conversion for logent.
//!
//! A lifecycle log records each activity instance as separate `start` and
//! `complete` rows. [`StartCompletePairing`] folds each pair into one row
//! with [`START_COLUMN`] and [`END_COLUMN`], which is the shape the
//! [`Normalizer`](logent_core::Normalizer) expects from its converter.

use logent_core::config::ColumnNames;
use logent_core::normalizer::{END_COLUMN, START_COLUMN};
use logent_core::types::{
    ACTIVITY_COLUMN, CASE_ID_COLUMN, END_TIMESTAMP_COLUMN, LIFECYCLE_COLUMN,
};
use logent_core::{EventLog, LifecycleConverter, LogError, Value};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

/// Columns read by [`StartCompletePairing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingColumns {
    pub case_id: String,
    pub activity: String,
    pub lifecycle: String,
    /// Event timestamp of each lifecycle row.
    pub timestamp: String,
}

impl Default for PairingColumns {
    fn default() -> Self {
        Self {
            case_id: CASE_ID_COLUMN.to_string(),
            activity: ACTIVITY_COLUMN.to_string(),
            lifecycle: LIFECYCLE_COLUMN.to_string(),
            timestamp: END_TIMESTAMP_COLUMN.to_string(),
        }
    }
}

impl From<&ColumnNames> for PairingColumns {
    fn from(c: &ColumnNames) -> Self {
        Self {
            case_id: c.case_id.clone(),
            activity: c.activity.clone(),
            lifecycle: c.lifecycle.clone(),
            timestamp: c.end_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Start,
    Complete,
}

impl Transition {
    fn parse(v: &Value) -> Option<Self> {
        let s = v.as_str()?.trim();
        if s.eq_ignore_ascii_case("start") {
            Some(Transition::Start)
        } else if s.eq_ignore_ascii_case("complete") {
            Some(Transition::Complete)
        } else {
            None
        }
    }
}

/// Pairs `start` and `complete` rows into activity instances.
///
/// Within one (case, activity) pair, a `complete` closes the oldest open
/// `start`. A `complete` with nothing open becomes an instance whose start
/// equals its end. A `start` that is never completed keeps a `Null` end.
/// Rows with any other transition are skipped.
///
/// Output rows follow the position of each instance's first row. Output
/// columns are the input columns minus the lifecycle and timestamp columns,
/// then `START` and `END`; the carried attributes come from the first row.
#[derive(Debug, Clone, Default)]
pub struct StartCompletePairing {
    columns: PairingColumns,
}

impl StartCompletePairing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: PairingColumns) -> Self {
        Self { columns }
    }
}

struct Instance<'a> {
    first_row: &'a [Value],
    start: Value,
    end: Value,
}

impl LifecycleConverter for StartCompletePairing {
    fn convert(&self, log: &EventLog) -> Result<EventLog, LogError> {
        let case_idx = log.column_index(&self.columns.case_id)?;
        let activity_idx = log.column_index(&self.columns.activity)?;
        let lifecycle_idx = log.column_index(&self.columns.lifecycle)?;
        let ts_idx = log.column_index(&self.columns.timestamp)?;

        let carried: Vec<usize> = (0..log.columns().len())
            .filter(|&i| i != lifecycle_idx && i != ts_idx)
            .collect();

        let mut instances: Vec<Instance> = Vec::new();
        let mut open: HashMap<(&Value, &Value), VecDeque<usize>> = HashMap::new();
        let mut skipped = 0usize;

        for (index, row) in log.rows().iter().enumerate() {
            let key = (&row[case_idx], &row[activity_idx]);
            let ts = row[ts_idx].clone();
            match Transition::parse(&row[lifecycle_idx]) {
                Some(Transition::Start) => {
                    open.entry(key).or_default().push_back(instances.len());
                    instances.push(Instance {
                        first_row: row,
                        start: ts,
                        end: Value::Null,
                    });
                }
                Some(Transition::Complete) => {
                    match open.get_mut(&key).and_then(VecDeque::pop_front) {
                        Some(i) => instances[i].end = ts,
                        None => instances.push(Instance {
                            first_row: row,
                            start: ts.clone(),
                            end: ts,
                        }),
                    }
                }
                None => {
                    skipped += 1;
                    trace!(row = index, transition = %row[lifecycle_idx], "lifecycle row skipped");
                }
            }
        }

        let dangling: usize = open.values().map(VecDeque::len).sum();
        debug!(
            rows = log.len(),
            instances = instances.len(),
            skipped,
            dangling,
            "lifecycle rows paired"
        );

        let mut columns: Vec<String> = carried.iter().map(|&i| log.columns()[i].clone()).collect();
        columns.push(START_COLUMN.to_string());
        columns.push(END_COLUMN.to_string());

        let mut out = EventLog::new(columns);
        for inst in instances {
            let mut row: Vec<Value> = carried.iter().map(|&i| inst.first_row[i].clone()).collect();
            row.push(inst.start);
            row.push(inst.end);
            out.push_row(row)?;
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
