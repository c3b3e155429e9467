//! Crate-level error types

use crate::config::ValidationReport;
use thiserror::Error;

/// Top-level error type for configuration loading
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    Invalid(#[from] ValidationReport),
}

/// Crate-level result type
pub type Result<T> = std::result::Result<T, Error>;
