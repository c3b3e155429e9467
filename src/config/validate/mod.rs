//! Configuration validation
//!
//! Validates resolved workflow configurations before any stage runs.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::{ConfigError, ValidationReport};
pub use validator::check_config;
