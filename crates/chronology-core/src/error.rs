// File: crates/chronology-core/src/error.rs
// Summary: Library error taxonomy (bad construction parameters, malformed input files, label lookups).

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A construction parameter is out of its domain (e.g. `linear_width <= 0`).
    /// Never clamped; the caller must fix the configuration.
    #[error("invalid parameter `{name}`: {reason} (got {value})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A data file could not be interpreted (unknown suffix, bad year range, empty series).
    #[error("malformed input {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("expected exactly one annotation labelled \"{text}\", found {matches}")]
    AnnotationNotFound { text: String, matches: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ChartError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedInput { path: path.into(), reason: reason.into() }
    }
}
