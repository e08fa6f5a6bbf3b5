//! PuTTY host list exporter.
//!
//! Produces the plain host list consumed by PuTTY bulk session-creation
//! scripts: one device per line, host name and IP separated by a tab.

use std::fmt::Write as _;

use crate::inventory::DeviceRecord;

/// Exporter for the PuTTY host list format.
pub struct PuttyExporter;

impl PuttyExporter {
    /// Renders the host list.
    #[must_use]
    pub fn render(devices: &[DeviceRecord]) -> String {
        let mut output = String::new();
        for device in devices {
            let _ = writeln!(output, "{}\t{}", device.hostname.trim(), device.ip.trim());
        }
        output
    }
}
