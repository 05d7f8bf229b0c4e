//! Entropy engine — trace- and prefix-level entropy of activity sequences.
//!
//! The pipeline is a single pass over the table:
//!
//! ```text
//! EventLog ──► case_sequences ──► [get_all_prefixes] ──► compute_entropy
//! ```
//!
//! Entropy is the base-10 Shannon entropy of the *combined* symbol
//! population: every symbol of every sequence (or of every prefix) is pooled
//! before frequencies are taken. It is not computed per case and averaged.
//!
//! Prefix mode pools n(n+1)/2 symbols for a trace of length n, so its cost
//! grows quadratically with trace length.

use crate::error::{EntropyError, LogError, Result};
use crate::types::{EventLog, Value, ACTIVITY_COLUMN, CASE_ID_COLUMN};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::ops::Deref;
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Options and results
// ---------------------------------------------------------------------------

/// Which sequence population entropy is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    /// Every non-empty prefix of every trace.
    #[default]
    Prefix,
    /// One complete trace per case.
    Trace,
}

/// Parameters for [`cf_entropy_seq`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntropyOptions {
    pub perspective: Perspective,
    /// Column holding the activity label.
    pub activity_name: String,
    /// Column holding the case identifier.
    pub case_id_name: String,
    /// Also report how many sequences the entropy was computed over.
    pub return_sequence_count: bool,
}

impl Default for EntropyOptions {
    fn default() -> Self {
        Self {
            perspective: Perspective::default(),
            activity_name: ACTIVITY_COLUMN.to_string(),
            case_id_name: CASE_ID_COLUMN.to_string(),
            return_sequence_count: false,
        }
    }
}

impl EntropyOptions {
    pub fn with_perspective(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn with_columns(mut self, activity_name: impl Into<String>, case_id_name: impl Into<String>) -> Self {
        self.activity_name = activity_name.into();
        self.case_id_name = case_id_name.into();
        self
    }

    pub fn with_sequence_count(mut self) -> Self {
        self.return_sequence_count = true;
        self
    }
}

/// Result of [`cf_entropy_seq`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SequenceEntropy {
    pub entropy: f64,
    /// Number of sequences (cases or prefixes) in the population. Only set
    /// when [`EntropyOptions::return_sequence_count`] was requested.
    pub sequence_count: Option<usize>,
}

// ---------------------------------------------------------------------------
// Sequence extraction
// ---------------------------------------------------------------------------

/// Group activity labels by case, in row order.
///
/// The table is scanned top to bottom. A case's sequence is created on the
/// first row carrying its identifier and appended on every later one, so each
/// sequence follows row order and the map follows first-seen case order.
/// Rows with a `Null` case identifier share one `Null` case.
///
/// Correctness depends on the caller handing over a chronologically sorted
/// table; nothing is re-sorted here.
pub fn case_sequences<'a>(
    log: &'a EventLog,
    activity_name: &str,
    case_id_name: &str,
) -> Result<IndexMap<&'a Value, Vec<&'a Value>>, LogError> {
    let case_index = log.column_index(case_id_name)?;
    let activity_index = log.column_index(activity_name)?;

    let mut cases: IndexMap<&Value, Vec<&Value>> = IndexMap::new();
    for row in log.rows() {
        cases
            .entry(&row[case_index])
            .or_default()
            .push(&row[activity_index]);
    }
    trace!(rows = log.len(), cases = cases.len(), "case sequences built");
    Ok(cases)
}

/// Every non-empty prefix of every sequence.
///
/// Output order is sequence by sequence, shortest prefix first. The result
/// holds `Σ len(sequence)` slices borrowed from the input.
pub fn get_all_prefixes<S, T>(sequences: &[S]) -> Vec<&[T]>
where
    S: Deref<Target = [T]>,
{
    sequences
        .iter()
        .flat_map(|seq| {
            let seq: &[T] = seq;
            (1..=seq.len()).map(move |n| &seq[..n])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Occurrence count of each distinct symbol across all sequences, in
/// first-seen order.
pub fn symbol_frequencies<S, T>(sequences: &[S]) -> IndexMap<&T, usize>
where
    S: Deref<Target = [T]>,
    T: Hash + Eq,
{
    let mut freq: IndexMap<&T, usize> = IndexMap::new();
    for symbol in sequences.iter().flat_map(|seq| seq.iter()) {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    freq
}

/// Base-10 Shannon entropy of the pooled symbol population,
/// `H = -Σ pᵢ log₁₀ pᵢ` with `pᵢ = countᵢ / total`.
///
/// Zero for a single distinct symbol, `log₁₀ k` for k equiprobable symbols.
/// An empty population has no distribution and yields
/// [`EntropyError::EmptyPopulation`].
pub fn compute_entropy<S, T>(sequences: &[S]) -> Result<f64, EntropyError>
where
    S: Deref<Target = [T]>,
    T: Hash + Eq,
{
    let freq = symbol_frequencies(sequences);
    let total: usize = freq.values().sum();
    if total == 0 {
        return Err(EntropyError::EmptyPopulation);
    }

    let n = total as f64;
    let h: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log10()
        })
        .sum();

    trace!(distinct = freq.len(), total, entropy = h, "entropy computed");
    // A lone symbol sums to -0.0.
    Ok(if h > 0.0 { h } else { 0.0 })
}

/// Entropy of an event log from the prefix or trace perspective.
///
/// Groups the rows into per-case sequences (see [`case_sequences`]), expands
/// them into prefixes under [`Perspective::Prefix`], and returns the entropy
/// of the pooled population. The sequence count, when requested, is the
/// number of cases (trace perspective) or the total number of prefixes, which
/// equals the sum of trace lengths (prefix perspective).
///
/// Fails with [`LogError::MissingColumn`] if either configured column is
/// absent, and with [`EntropyError::EmptyPopulation`] if the log has no rows.
pub fn cf_entropy_seq(log: &EventLog, options: &EntropyOptions) -> Result<SequenceEntropy> {
    let cases = case_sequences(log, &options.activity_name, &options.case_id_name)?;
    let traces: Vec<Vec<&Value>> = cases.into_values().collect();

    let (entropy, count) = match options.perspective {
        Perspective::Prefix => {
            let prefixes = get_all_prefixes(&traces);
            (compute_entropy(&prefixes)?, prefixes.len())
        }
        Perspective::Trace => (compute_entropy(&traces)?, traces.len()),
    };

    debug!(
        perspective = ?options.perspective,
        cases = traces.len(),
        sequences = count,
        entropy,
        "log entropy computed"
    );

    Ok(SequenceEntropy {
        entropy,
        sequence_count: options.return_sequence_count.then_some(count),
    })
}

/// Trace-level entropy with the default column names.
pub fn trace_entropy(log: &EventLog) -> Result<f64> {
    let options = EntropyOptions::default().with_perspective(Perspective::Trace);
    Ok(cf_entropy_seq(log, &options)?.entropy)
}

/// Prefix-level entropy with the default column names.
pub fn prefix_entropy(log: &EventLog) -> Result<f64> {
    Ok(cf_entropy_seq(log, &EntropyOptions::default())?.entropy)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
