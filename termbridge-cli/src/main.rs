//! termbridge CLI - Command-line interface for the termbridge session tool
//!
//! Provides commands for importing delimited host files into session
//! records and for exporting monitoring-system inventories into vendor
//! session-import formats.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;
use termbridge_core::tracing::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    if !cli.quiet {
        let config = TracingConfig {
            level: TracingLevel::from_verbosity(cli.verbose),
            use_stdout: false,
        };
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: {e}");
        }
    }

    let result = commands::dispatch(config_path, cli.command, cli.quiet);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
