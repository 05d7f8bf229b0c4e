//! Configuration types for logent.
//!
//! [`Config::defaults`] returns the built-in defaults without touching the
//! filesystem. [`Config::from_file`] and [`Config::from_toml_str`] layer a
//! caller-supplied TOML document on top of those defaults, so a partial file
//! only needs the keys it overrides. Nothing is read implicitly.

use crate::entropy::{EntropyOptions, Perspective};
use crate::types::{
    ACTIVITY_COLUMN, CASE_ID_COLUMN, END_TIMESTAMP_COLUMN, LIFECYCLE_COLUMN,
    START_TIMESTAMP_COLUMN,
};
use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[columns]
case_id    = "case:concept:name"
activity   = "concept:name"
lifecycle  = "lifecycle:transition"
start_time = "start:timestamp"
end_time   = "time:timestamp"

[entropy]
perspective           = "prefix"
return_sequence_count = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub columns: ColumnNames,
    #[serde(default)]
    pub entropy: EntropyConfig,
}

/// `[columns]` section: the event-log schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnNames {
    #[serde(default = "default_case_id")]
    pub case_id: String,
    #[serde(default = "default_activity")]
    pub activity: String,
    #[serde(default = "default_lifecycle")]
    pub lifecycle: String,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
}

fn default_case_id() -> String { CASE_ID_COLUMN.to_string() }
fn default_activity() -> String { ACTIVITY_COLUMN.to_string() }
fn default_lifecycle() -> String { LIFECYCLE_COLUMN.to_string() }
fn default_start_time() -> String { START_TIMESTAMP_COLUMN.to_string() }
fn default_end_time() -> String { END_TIMESTAMP_COLUMN.to_string() }

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            case_id: default_case_id(),
            activity: default_activity(),
            lifecycle: default_lifecycle(),
            start_time: default_start_time(),
            end_time: default_end_time(),
        }
    }
}

/// `[entropy]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntropyConfig {
    #[serde(default)]
    pub perspective: Perspective,
    #[serde(default)]
    pub return_sequence_count: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Layer a TOML document over the built-in defaults.
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Layer a config file over the built-in defaults. The format follows
    /// the file extension; the file must exist.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_ref()).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Entropy parameters for [`cf_entropy_seq`](crate::entropy::cf_entropy_seq).
    pub fn entropy_options(&self) -> EntropyOptions {
        EntropyOptions {
            perspective: self.entropy.perspective,
            activity_name: self.columns.activity.clone(),
            case_id_name: self.columns.case_id.clone(),
            return_sequence_count: self.entropy.return_sequence_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
