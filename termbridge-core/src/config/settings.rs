//! Persistent application settings.

use serde::{Deserialize, Serialize};

use crate::models::Protocol;

/// Default field delimiter for import files.
pub const DEFAULT_DELIMITER: &str = ",";

/// Settings for the import/export tool, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field delimiter expected in import files.
    pub delimiter: String,
    /// Whether importing over an existing session path replaces the record
    /// instead of creating a timestamp-suffixed sibling.
    pub overwrite_existing: bool,
    /// Protocol used when the header carries neither a `protocol` field nor
    /// a `protocol=` default.
    pub fallback_protocol: Protocol,
    /// Target host application major version, for the VT320 and RDP gates.
    pub target_major_version: u32,
    /// Whether the target environment is Windows-like. `None` means detect
    /// from the platform this tool runs on.
    pub target_windows: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            overwrite_existing: false,
            fallback_protocol: Protocol::Ssh2,
            target_major_version: 9,
            target_windows: None,
        }
    }
}
