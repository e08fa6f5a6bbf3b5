//! SecureCRT import CSV exporter.
//!
//! Produces a delimited file in the exact shape this tool's own importer
//! consumes: a header line with `name=value` default annotations followed
//! by one line per device. Protocol and username are defaulted in the
//! header, so the data columns stay empty and inherit them.

use std::fmt::Write as _;

use crate::inventory::DeviceRecord;

use super::{ExportOptions, scrub_field};

/// Field delimiter of the generated file.
const DELIMITER: char = ',';

/// Exporter for the SecureCRT bulk-import CSV format.
pub struct SecureCrtCsvExporter;

impl SecureCrtCsvExporter {
    /// Renders the import file.
    #[must_use]
    pub fn render(devices: &[DeviceRecord], options: &ExportOptions) -> String {
        let mut output = String::new();
        let username = scrub_field(options.username(), DELIMITER);
        if username.is_empty() {
            output.push_str("hostname,session_name,folder,description,description,protocol=SSH2\n");
        } else {
            let _ = writeln!(
                output,
                "hostname,session_name,folder,description,description,protocol=SSH2,username={username}"
            );
        }
        let trailing_username_column = !username.is_empty();
        for device in devices {
            let hostname = scrub_field(&device.ip, DELIMITER);
            let session_name = scrub_field(&device.hostname, DELIMITER);
            let folder = scrub_field(device.folder(), DELIMITER);
            let hardware = scrub_field(&device.hardware_summary(), DELIMITER);
            let serials = scrub_field(&device.serials().unwrap_or_default(), DELIMITER);
            let _ = write!(
                output,
                "{hostname},{session_name},{folder},{hardware},{serials},"
            );
            if trailing_username_column {
                output.push(DELIMITER);
            }
            output.push('\n');
        }
        output
    }
}
