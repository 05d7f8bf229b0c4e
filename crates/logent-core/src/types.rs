//! Core types for logent-core.
//!
//! This module defines the in-memory event log table: the [`Value`] held in
//! each cell and the row-ordered [`EventLog`] with name-based column lookup.
//! Column names follow the XES attribute conventions used by process-mining
//! tooling; the constants below are the canonical defaults.

use crate::error::LogError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Case identifier column.
pub const CASE_ID_COLUMN: &str = "case:concept:name";
/// Activity label column.
pub const ACTIVITY_COLUMN: &str = "concept:name";
/// Lifecycle transition column (`start`, `complete`, ...).
pub const LIFECYCLE_COLUMN: &str = "lifecycle:transition";
/// Activity-instance start timestamp.
pub const START_TIMESTAMP_COLUMN: &str = "start:timestamp";
/// Activity-instance completion timestamp.
pub const END_TIMESTAMP_COLUMN: &str = "time:timestamp";

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A single cell of an [`EventLog`].
///
/// `Null` is the missing-value marker. Floats compare and hash by bit
/// pattern so that every value can key a case group or a frequency table.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Timestamp(DateTime<Utc>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Str(s) => s.hash(state),
            Value::Timestamp(ts) => ts.hash(state),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Nested arrays and objects are kept as their compact JSON text.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Str(s),
            other => Value::Str(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// EventLog
// ---------------------------------------------------------------------------

/// An ordered, in-memory event log table.
///
/// Rows are stored densely in the order they were pushed; the position of a
/// row is its index. Row order is meaningful: sequence extraction reads the
/// table top to bottom and never re-sorts, so callers must hand over a table
/// that is already in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventLog {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl EventLog {
    /// Create an empty log with the given column set.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a log from JSON objects, one per row.
    ///
    /// The column set is the union of all keys, in the order the records
    /// yield them; keys a record lacks become [`Value::Null`] in that row.
    pub fn from_records<I>(records: I) -> Result<Self, LogError>
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let mut objects = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            match record {
                serde_json::Value::Object(map) => objects.push(map),
                _ => return Err(LogError::NotARecord { index }),
            }
        }

        let mut columns: Vec<String> = Vec::new();
        for map in &objects {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows: Vec<Vec<Value>> = objects
            .into_iter()
            .map(|mut map| {
                columns
                    .iter()
                    .map(|c| map.remove(c).map_or(Value::Null, Value::from))
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    /// Append a row. The row must have one value per column.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), LogError> {
        if row.len() != self.columns.len() {
            return Err(LogError::RowArity {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Position of `name` in the column set, or [`LogError::MissingColumn`].
    pub fn column_index(&self, name: &str) -> Result<usize, LogError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| LogError::MissingColumn {
                column: name.to_string(),
                available: self.columns.clone(),
            })
    }

    /// Iterate over one column top to bottom.
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value> + '_, LogError> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[index]))
    }

    /// Cell at (`row`, `column`). `Ok(None)` when the row is out of range.
    pub fn get(&self, row: usize, column: &str) -> Result<Option<&Value>, LogError> {
        let index = self.column_index(column)?;
        Ok(self.rows.get(row).map(|r| &r[index]))
    }

    /// Rename columns by `(from, to)` pairs. Pairs whose source column does
    /// not exist are ignored. An existing column already named `to` is
    /// replaced by the renamed one.
    pub fn rename_columns(&mut self, pairs: &[(&str, &str)]) {
        for &(from, to) in pairs {
            if from == to || !self.has_column(from) {
                continue;
            }
            self.drop_column(to);
            if let Some(c) = self.columns.iter_mut().find(|c| *c == from) {
                *c = to.to_string();
            }
        }
    }

    /// Replace every cell of `name` with `f(cell)`.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<(), LogError>
    where
        F: FnMut(Value) -> Value,
    {
        let index = self.column_index(name)?;
        for row in &mut self.rows {
            let cell = std::mem::take(&mut row[index]);
            row[index] = f(cell);
        }
        Ok(())
    }

    /// Remove a column and its cells. Returns `false` if it did not exist.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Ok(index) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
