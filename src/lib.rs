//! Ajustar: workflow configuration resolver
//!
//! Reads YAML workflow documents for bioimage deep-learning pipelines,
//! fills in defaults, validates every field against its documented domain,
//! and hands back an immutable, shareable snapshot.
//!
//! # Example
//!
//! ```no_run
//! use ajustar::load_config;
//!
//! let frozen = load_config("workflow.yaml")?;
//! println!("workflow: {}", frozen.problem.kind.as_str());
//! # Ok::<(), ajustar::Error>(())
//! ```
//!
//! Validation never stops at the first problem: every unknown key, type
//! mismatch, and out-of-range value in the document is collected into a
//! single [`ValidationReport`](config::ValidationReport).

pub mod cli;
pub mod config;
pub mod error;
pub mod templates;

pub use config::{load_config, Document, FrozenConfig, ValidationReport, WorkflowConfig};
pub use error::{Error, Result};
