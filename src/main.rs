//! Ajustar CLI
//!
//! Configuration tooling for bioimage workflow documents.
//!
//! # Usage
//!
//! ```bash
//! # Validate a config, reporting every violation at once
//! ajustar validate config.yaml
//!
//! # Validate with a per-section summary
//! ajustar validate config.yaml --detailed
//!
//! # Show the fully resolved config
//! ajustar info config.yaml --format yaml
//!
//! # Generate a starter config
//! ajustar init --workflow DENOISING --ndim 2D -o config.yaml
//! ```

use ajustar::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
