//! Inventory export command handler.

use std::path::{Path, PathBuf};

use termbridge_core::export::{ExportFormat, ExportOptions, export_to_path};
use termbridge_core::inventory::load_inventory;

use crate::cli::ExportFormatArg;
use crate::error::CliError;

/// Export inventory command handler
pub fn cmd_export(
    format: ExportFormatArg,
    inventory_path: &Path,
    output: Option<&Path>,
    username: Option<&str>,
    quiet: bool,
) -> Result<(), CliError> {
    let inventory =
        load_inventory(inventory_path).map_err(|e| CliError::Inventory(e.to_string()))?;

    for skipped in &inventory.skipped {
        tracing::warn!(
            index = skipped.index,
            reason = %skipped.reason,
            "inventory entry skipped"
        );
    }

    let format = ExportFormat::from(format);
    let options = username.map_or_else(ExportOptions::default, ExportOptions::with_username);
    let output = output.map_or_else(
        || PathBuf::from(format.default_file_name()),
        Path::to_path_buf,
    );

    export_to_path(format, &inventory.devices, &options, &output)
        .map_err(|e| CliError::Export(e.to_string()))?;

    if !quiet {
        println!(
            "Export complete: {} devices written to {} ({} inventory entries skipped)",
            inventory.devices.len(),
            output.display(),
            inventory.skipped.len()
        );
    }

    Ok(())
}
