//! Vendor session-import file exporters.
//!
//! Renders a monitoring-system inventory into the session-import formats of
//! four terminal emulators. Each exporter produces the whole document as a
//! `String`; `export_to_path` writes it out.

mod putty;
mod securecrt;
mod superputty;
mod xshell;

use std::path::Path;

use crate::error::ExportError;
use crate::inventory::DeviceRecord;

pub use putty::PuttyExporter;
pub use securecrt::SecureCrtCsvExporter;
pub use superputty::SuperPuttyExporter;
pub use xshell::XshellCsvExporter;

/// Options shared by all exporters.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Account name stamped into formats that carry one.
    pub username: Option<String>,
}

impl ExportOptions {
    /// Creates options with a username.
    #[must_use]
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// Returns the username, or an empty string.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }
}

/// The supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PuTTY host list (plain text)
    Putty,
    /// SuperPuTTY session XML
    SuperPutty,
    /// SecureCRT import CSV (consumable by this tool's own importer)
    SecureCrt,
    /// Xshell import CSV
    Xshell,
}

impl ExportFormat {
    /// All supported formats.
    pub const ALL: &'static [Self] = &[
        Self::Putty,
        Self::SuperPutty,
        Self::SecureCrt,
        Self::Xshell,
    ];

    /// Returns the format identifier used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Putty => "putty",
            Self::SuperPutty => "superputty",
            Self::SecureCrt => "securecrt",
            Self::Xshell => "xshell",
        }
    }

    /// Looks up a format identifier, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL.iter().find(|f| f.as_str() == lower).copied()
    }

    /// Returns a conventional output file name for this format.
    #[must_use]
    pub const fn default_file_name(&self) -> &'static str {
        match self {
            Self::Putty => "puttyhosts.txt",
            Self::SuperPutty => "Sessions_SuperPutty_Import.xml",
            Self::SecureCrt => "Sessions_SecureCRT_Import.csv",
            Self::Xshell => "Sessions_Xshell_Import.csv",
        }
    }

    /// Renders an inventory into this format.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be serialized.
    pub fn render(
        &self,
        devices: &[DeviceRecord],
        options: &ExportOptions,
    ) -> Result<String, ExportError> {
        match self {
            Self::Putty => Ok(PuttyExporter::render(devices)),
            Self::SuperPutty => SuperPuttyExporter::render(devices, options),
            Self::SecureCrt => Ok(SecureCrtCsvExporter::render(devices, options)),
            Self::Xshell => Ok(XshellCsvExporter::render(devices, options)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders an inventory and writes the document to a path.
///
/// # Errors
///
/// Returns an error when rendering or the write fails.
pub fn export_to_path(
    format: ExportFormat,
    devices: &[DeviceRecord],
    options: &ExportOptions,
    path: &Path,
) -> Result<(), ExportError> {
    let document = format.render(devices, options)?;
    std::fs::write(path, document).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces delimiter occurrences inside a CSV field value.
///
/// The import formats here have no quoting convention, so a value that
/// contains the field separator would shift every later column. A space is
/// the lossy but safe substitute.
pub(crate) fn scrub_field(value: &str, delimiter: char) -> String {
    value.trim().replace(delimiter, " ")
}
