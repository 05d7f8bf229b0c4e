//! Test builders — ergonomic constructors for `EventLog` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use logent::types::{
    ACTIVITY_COLUMN, CASE_ID_COLUMN, END_TIMESTAMP_COLUMN, LIFECYCLE_COLUMN,
    START_TIMESTAMP_COLUMN,
};
use logent::{EventLog, Value};

// ---------------------------------------------------------------------------
// EventLogBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for interval-form [`EventLog`] fixtures.
///
/// # Example
///
/// ```rust
/// let log = EventLogBuilder::new()
///     .event("case-1", "register")
///     .timed_event("case-1", "approve", "2024-01-15 10:00:00", "2024-01-15 10:05:00")
///     .build();
/// ```
pub struct EventLogBuilder {
    rows: Vec<[Value; 4]>,
}

impl EventLogBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append an event without timestamps.
    pub fn event(self, case: &str, activity: &str) -> Self {
        self.row(case, activity, Value::Null, Value::Null)
    }

    /// Append an event with raw start/end timestamp strings.
    pub fn timed_event(self, case: &str, activity: &str, start: &str, end: &str) -> Self {
        self.row(case, activity, start.into(), end.into())
    }

    /// Append one event per activity, all for `case`.
    pub fn trace(mut self, case: &str, activities: &[&str]) -> Self {
        for act in activities {
            self = self.event(case, act);
        }
        self
    }

    fn row(mut self, case: &str, activity: &str, start: Value, end: Value) -> Self {
        self.rows.push([case.into(), activity.into(), start, end]);
        self
    }

    pub fn build(self) -> EventLog {
        let mut log = EventLog::new([
            CASE_ID_COLUMN,
            ACTIVITY_COLUMN,
            START_TIMESTAMP_COLUMN,
            END_TIMESTAMP_COLUMN,
        ]);
        for row in self.rows {
            log.push_row(row.to_vec()).unwrap();
        }
        log
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a log from `(case, activity)` pairs in row order.
pub fn log_from_pairs(pairs: &[(&str, &str)]) -> EventLog {
    pairs
        .iter()
        .fold(EventLogBuilder::new(), |b, (case, act)| b.event(case, act))
        .build()
}

/// Build a log from whole traces, one case after another.
pub fn log_from_traces(traces: &[(&str, &[&str])]) -> EventLog {
    traces
        .iter()
        .fold(EventLogBuilder::new(), |b, (case, acts)| b.trace(case, acts))
        .build()
}

/// Build a lifecycle-form log from `(case, activity, transition, timestamp)`.
pub fn lifecycle_log(rows: &[(&str, &str, &str, &str)]) -> EventLog {
    let mut log = EventLog::new([
        CASE_ID_COLUMN,
        ACTIVITY_COLUMN,
        LIFECYCLE_COLUMN,
        END_TIMESTAMP_COLUMN,
    ]);
    for &(case, act, transition, ts) in rows {
        log.push_row(vec![case.into(), act.into(), transition.into(), ts.into()])
            .unwrap();
    }
    log
}
