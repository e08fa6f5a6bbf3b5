//! Monitoring-system inventory input.
//!
//! The monitoring system's API client is out of scope; this module consumes
//! its already-exported device list, a JSON array of objects keyed the way
//! the monitoring dump writes them (`Site_Address`, `Hostname`, `IP`,
//! serial numbers, OS version, model). Malformed entries are skipped with a
//! reason rather than failing the whole load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::InventoryError;

/// One device pulled from the monitoring system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Host group / site the device belongs to.
    #[serde(rename = "Site_Address", default)]
    pub site: String,
    /// Device host name.
    #[serde(rename = "Hostname")]
    pub hostname: String,
    /// Primary interface IP address.
    #[serde(rename = "IP")]
    pub ip: String,
    /// Chassis serial number.
    #[serde(rename = "Serial_Number_A", default)]
    pub serial_a: String,
    /// Secondary serial number (stacked / modular devices).
    #[serde(rename = "Serial_Number_B", default)]
    pub serial_b: String,
    /// Operating system / firmware version.
    #[serde(rename = "OS_Version", default)]
    pub os_version: String,
    /// Hardware model.
    #[serde(rename = "Model", default)]
    pub model: String,
}

impl DeviceRecord {
    /// Returns the folder the device's session files under, derived from
    /// the site name.
    #[must_use]
    pub fn folder(&self) -> &str {
        self.site.trim()
    }

    /// Returns a one-line hardware summary, for description fields.
    #[must_use]
    pub fn hardware_summary(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let model = self.model.trim();
        let os = self.os_version.trim();
        if !model.is_empty() {
            parts.push(model);
        }
        if !os.is_empty() {
            parts.push(os);
        }
        parts.join(" ")
    }

    /// Returns the serial numbers joined for display, when present.
    #[must_use]
    pub fn serials(&self) -> Option<String> {
        let a = self.serial_a.trim();
        let b = self.serial_b.trim();
        match (a.is_empty(), b.is_empty()) {
            (true, true) => None,
            (false, true) => Some(format!("SN {a}")),
            (true, false) => Some(format!("SN {b}")),
            (false, false) => Some(format!("SN {a} / {b}")),
        }
    }
}

/// An inventory entry that could not be parsed.
#[derive(Debug, Clone)]
pub struct SkippedDevice {
    /// Zero-based index of the entry in the source array.
    pub index: usize,
    /// Why the entry was skipped.
    pub reason: String,
}

/// A loaded inventory: parsed devices plus skipped entries.
#[derive(Debug, Default)]
pub struct Inventory {
    /// Successfully parsed devices, in source order.
    pub devices: Vec<DeviceRecord>,
    /// Entries that failed to parse.
    pub skipped: Vec<SkippedDevice>,
}

impl Inventory {
    /// Returns a one-line summary of the load.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Devices: {}, Skipped: {}",
            self.devices.len(),
            self.skipped.len()
        )
    }
}

/// Parses an inventory dump from JSON text.
///
/// # Errors
///
/// Returns an error when the document itself is not a JSON array; bad
/// entries inside the array are skipped, not fatal.
pub fn parse_inventory(content: &str) -> Result<Inventory, InventoryError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(content)?;
    let mut inventory = Inventory::default();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<DeviceRecord>(entry) {
            Ok(device) => inventory.devices.push(device),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed inventory entry");
                inventory.skipped.push(SkippedDevice {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(inventory)
}

/// Loads an inventory dump from a file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a JSON array.
pub fn load_inventory(path: &Path) -> Result<Inventory, InventoryError> {
    let content = fs::read_to_string(path)?;
    parse_inventory(&content)
}
