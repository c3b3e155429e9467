//! Validation error types
//!
//! A single resolution pass collects every violation into a
//! [`ValidationReport`] so a hand-edited document can be fixed in one go.
//! Parse errors are the exception: nothing can be validated on an unparsed
//! document, so they surface alone through the crate-level error.

use std::fmt;
use thiserror::Error;

/// One configuration violation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Unknown key '{key}' in section {section}")]
    UnknownKey { section: String, key: String },

    #[error("Missing required key: {key}")]
    MissingRequiredKey { key: String },

    #[error("Type mismatch for {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error("Invalid value for {key}: {value} (expected {constraint})")]
    OutOfRange {
        key: String,
        value: String,
        constraint: &'static str,
    },

    #[error("Invalid choice for {key}: '{value}'. Valid options: {choices:?}")]
    InvalidChoice {
        key: String,
        value: String,
        choices: &'static [&'static str],
    },

    #[error("Wrong arity for {key}: expected {expected} entries, found {found}")]
    ArityMismatch {
        key: String,
        expected: usize,
        found: usize,
    },

    #[error("Length mismatch: {key_a} has {len_a} entries but {key_b} has {len_b} (one entry per network stage)")]
    LengthMismatch {
        key_a: &'static str,
        len_a: usize,
        key_b: &'static str,
        len_b: usize,
    },

    #[error("DATA.PATCH_SIZE has {patch_len} entries but PROBLEM.NDIM is {ndim} (expected {expected} spatial axes plus a channel count)")]
    PatchDimensionality {
        patch_len: usize,
        ndim: &'static str,
        expected: usize,
    },

    #[error("Empty required field: {key}")]
    EmptyRequiredField { key: String },

    #[error("Incompatible options {key_a} and {key_b}: {reason}")]
    Incompatible {
        key_a: &'static str,
        key_b: &'static str,
        reason: String,
    },
}

/// Every violation found in one validation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: Vec<ConfigError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }

    /// Ok when no violations were collected, otherwise the full report
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// True when any collected error mentions the given key fragment
    pub fn mentions(&self, fragment: &str) -> bool {
        self.errors.iter().any(|e| e.to_string().contains(fragment))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Configuration invalid: {} violation(s) found",
            self.errors.len()
        )?;
        for error in &self.errors {
            writeln!(f, "  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
