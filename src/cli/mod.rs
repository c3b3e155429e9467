//! CLI module for ajustar
//!
//! Command definitions plus the handlers behind them.

mod commands;
pub(crate) mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ajustar: workflow configuration resolver
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ajustar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Resolve, validate, and freeze bioimage workflow configurations")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration file and report every violation
    Validate(ValidateArgs),

    /// Display the fully resolved configuration
    Info(InfoArgs),

    /// Generate a starter configuration for a workflow
    Init(InitArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Workflow type (e.g. SEMANTIC_SEG, DENOISING)
    #[arg(short, long, value_name = "TYPE")]
    pub workflow: String,

    /// Problem dimensionality
    #[arg(long, default_value = "2D")]
    pub ndim: String,

    /// Write the template to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Output format for info command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json, yaml")),
        }
    }
}
