//! Workflow configuration resolver
//!
//! The single startup sequence every workflow goes through:
//!
//! 1. [`Document::from_path`] (or `from_str`) parses the YAML document.
//! 2. [`validate`] collects every violation in one pass.
//! 3. [`resolve_defaults`] produces the typed, fully-defaulted
//!    [`WorkflowConfig`].
//! 4. [`WorkflowConfig::freeze`] yields the immutable snapshot handed to the
//!    engine.
//!
//! [`load_config`] runs the whole sequence for the common case.

pub mod document;
pub mod freeze;
pub mod resolve;
pub mod schema;
pub mod validate;

pub use document::{Document, Scalar, Value};
pub use freeze::FrozenConfig;
pub use resolve::resolve_defaults;
pub use schema::{
    AugmentorConfig, DataConfig, DenoisingConfig, DetectionConfig, InstanceSegConfig, ModelConfig,
    Ndim, ProblemConfig, SystemConfig, TestConfig, TestDataConfig, TrainConfig, TrainDataConfig,
    ValDataConfig, WorkflowConfig, WorkflowKind,
};
pub use validate::{check_config, ConfigError, ValidationReport};

use crate::error::Result;
use std::path::Path;

/// Validate a parsed document, collecting every violation
///
/// Covers unknown keys, type mismatches, missing required keys, domain
/// violations and cross-field constraints.
pub fn validate(doc: &Document) -> std::result::Result<(), ValidationReport> {
    let (config, mut report) = resolve::resolve_with_report(doc);
    check_config(&config, &mut report);
    report.into_result()
}

/// Load, validate, resolve and freeze a configuration file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FrozenConfig> {
    let doc = Document::from_path(path)?;
    let (config, mut report) = resolve::resolve_with_report(&doc);
    check_config(&config, &mut report);
    report.into_result()?;
    Ok(config.freeze())
}
