//! Domain-specific assertion macros for logent harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! entropy or normalization invariant was violated.

use logent::normalizer::is_clean_timestamp_column;
use logent::{EventLog, Value};

/// Absolute tolerance used when comparing entropy values.
pub const ENTROPY_EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Entropy assertions
// ---------------------------------------------------------------------------

/// Assert that two entropy values agree within [`ENTROPY_EPS`].
///
/// ```rust
/// assert_entropy_eq!(h, 2f64.log10());
/// ```
#[macro_export]
macro_rules! assert_entropy_eq {
    ($actual:expr, $expected:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        if (actual - expected).abs() > $crate::common::ENTROPY_EPS {
            panic!(
                "assert_entropy_eq! failed:\n  expected: {:.12}\n  actual:   {:.12}\n  diff:     {:e}",
                expected,
                actual,
                (actual - expected).abs()
            );
        }
    }};
}

/// Assert that an entropy value lies in `[0, log10(k)]` for an alphabet of
/// `k` distinct symbols.
#[macro_export]
macro_rules! assert_entropy_bounded {
    ($h:expr, $alphabet:expr) => {{
        let h: f64 = $h;
        let k: usize = $alphabet;
        let max = (k as f64).log10();
        if h < 0.0 || h > max + $crate::common::ENTROPY_EPS {
            panic!(
                "assert_entropy_bounded! failed: {} not in [0, log10({})] = [0, {}]",
                h, k, max
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Normalizer invariant helpers
// ---------------------------------------------------------------------------

/// Assert that every cell of `column` is a parsed timestamp or `Null`, never
/// a raw string.
pub fn assert_clean_timestamps(log: &EventLog, column: &str) {
    if is_clean_timestamp_column(log, column).unwrap() {
        return;
    }
    for (row, cell) in log.column(column).unwrap().enumerate() {
        assert!(
            matches!(cell, Value::Timestamp(_) | Value::Null),
            "column {column:?} row {row} holds an unparsed value: {cell:?}"
        );
    }
    unreachable!("is_clean_timestamp_column rejected {column:?} but every cell is clean");
}

/// Assert the activity column of `log` reads `expected` top to bottom.
pub fn assert_activities(log: &EventLog, expected: &[&str]) {
    let actual: Vec<String> = log
        .column(logent::types::ACTIVITY_COLUMN)
        .unwrap()
        .map(|v| v.to_string())
        .collect();
    pretty_assertions::assert_eq!(actual, expected);
}
