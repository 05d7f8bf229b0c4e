//! Non-strict timestamp coercion.
//!
//! Cells that can be read as a point in time become [`Value::Timestamp`];
//! everything else becomes [`Value::Null`]. Nothing here returns an error.

use crate::types::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Coerce one cell to a timestamp.
///
/// - `Timestamp` and `Null` pass through unchanged.
/// - Strings are tried as RFC 3339, then date-times with an offset, then
///   naive date-times (read as UTC), then bare dates (midnight UTC).
/// - Integers and finite floats are nanoseconds since the Unix epoch.
/// - Anything else is `Null`.
pub fn coerce_timestamp(value: Value) -> Value {
    match value {
        Value::Timestamp(_) | Value::Null => value,
        Value::Str(s) => parse_timestamp(&s).map_or(Value::Null, Value::Timestamp),
        Value::Int(nanos) => Value::Timestamp(DateTime::from_timestamp_nanos(nanos)),
        Value::Float(nanos) if nanos.is_finite() && nanos.abs() <= i64::MAX as f64 => {
            Value::Timestamp(DateTime::from_timestamp_nanos(nanos as i64))
        }
        _ => Value::Null,
    }
}

/// Parse a timestamp string, returning `None` if no known layout matches.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(s, fmt) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts.and_utc());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}
