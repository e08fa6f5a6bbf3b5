//! Command handler modules for the CLI.

mod completions;
mod export;
mod import;

use std::path::Path;

use termbridge_core::config::ConfigManager;

use crate::cli::Commands;
use crate::error::CliError;

pub use import::ImportParams;

/// Builds a config manager for an optional explicit directory.
fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_dir(path)),
        None => ConfigManager::new().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(
    config_path: Option<&Path>,
    command: Commands,
    quiet: bool,
) -> Result<(), CliError> {
    match command {
        Commands::Import {
            file,
            delimiter,
            store_dir,
            report_dir,
            target_version,
            target_os,
            overwrite,
            dry_run,
        } => import::cmd_import(
            config_path,
            &ImportParams {
                file,
                delimiter,
                store_dir,
                report_dir,
                target_version,
                target_os,
                overwrite,
                dry_run,
            },
            quiet,
        ),
        Commands::Export {
            format,
            inventory,
            output,
            username,
        } => export::cmd_export(
            format,
            &inventory,
            output.as_deref(),
            username.as_deref(),
            quiet,
        ),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
