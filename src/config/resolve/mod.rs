//! Document resolution
//!
//! Turns a raw [`Document`](crate::config::document::Document) into a typed
//! [`WorkflowConfig`](crate::config::schema::WorkflowConfig), filling defaults
//! and collecting unknown-key, type and missing-required violations.

mod resolver;


pub use resolver::resolve_defaults;

pub(crate) use resolver::resolve_with_report;
