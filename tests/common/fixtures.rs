//! Static event-log corpora used across harnesses.
//!
//! Each corpus is a slice of `(case, activities)` traces. The high-volume
//! generator is deterministic so benches and tests see the same log.

/// A small order-handling log with a shared happy path and two deviations.
pub const CORPUS_ORDERS: &[(&str, &[&str])] = &[
    ("o-1", &["register", "check", "ship", "invoice"]),
    ("o-2", &["register", "check", "ship", "invoice"]),
    ("o-3", &["register", "check", "reject"]),
    ("o-4", &["register", "ship", "check", "invoice"]),
];

/// Every case runs the same single activity.
pub const CORPUS_CONSTANT: &[(&str, &[&str])] = &[
    ("c-1", &["ping", "ping"]),
    ("c-2", &["ping"]),
    ("c-3", &["ping", "ping", "ping"]),
];

/// Two cases, each constant, over different activities.
pub const CORPUS_SPLIT: &[(&str, &[&str])] = &[("A", &["x", "x", "x"]), ("B", &["y", "y", "y"])];

/// Raw lifecycle rows: `(case, activity, transition, timestamp)`.
pub const CORPUS_LIFECYCLE: &[(&str, &str, &str, &str)] = &[
    ("1", "register", "start", "2024-01-15T09:00:00Z"),
    ("1", "register", "complete", "2024-01-15T09:05:00Z"),
    ("1", "check", "start", "2024-01-15T09:10:00Z"),
    ("2", "register", "start", "2024-01-15T09:11:00Z"),
    ("1", "check", "complete", "2024-01-15T09:20:00Z"),
    ("2", "register", "complete", "not a timestamp"),
    ("2", "ship", "complete", "2024-01-15T10:00:00Z"),
];

/// `cases` traces cycling through a ten-activity alphabet with varied
/// lengths, interleaved row by row.
pub fn corpus_high_volume(cases: usize) -> Vec<(String, String)> {
    const ALPHABET: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let lengths: Vec<usize> = (0..cases).map(|c| 3 + c % 7).collect();
    let longest = lengths.iter().copied().max().unwrap_or(0);

    let mut rows = Vec::new();
    for step in 0..longest {
        for (case, &len) in lengths.iter().enumerate() {
            if step < len {
                let act = ALPHABET[(case + step * step) % ALPHABET.len()];
                rows.push((format!("case-{case}"), act.to_string()));
            }
        }
    }
    rows
}
