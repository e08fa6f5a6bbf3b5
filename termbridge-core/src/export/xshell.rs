//! Xshell import CSV exporter.
//!
//! Produces the fixed-header CSV that Xshell's session import wizard
//! understands, one SSH session per device.

use std::fmt::Write as _;

use crate::inventory::DeviceRecord;

use super::{ExportOptions, scrub_field};

/// Field delimiter of the generated file.
const DELIMITER: char = ',';

/// Header line Xshell's import wizard expects.
const HEADER: &str = "Name,Protocol,Host,Port,UserName,Description";

/// Exporter for the Xshell session import CSV format.
pub struct XshellCsvExporter;

impl XshellCsvExporter {
    /// Renders the import file.
    #[must_use]
    pub fn render(devices: &[DeviceRecord], options: &ExportOptions) -> String {
        let mut output = String::new();
        output.push_str(HEADER);
        output.push('\n');
        let username = scrub_field(options.username(), DELIMITER);
        for device in devices {
            let name = scrub_field(&device.hostname, DELIMITER);
            let host = scrub_field(&device.ip, DELIMITER);
            let description = scrub_field(&device.hardware_summary(), DELIMITER);
            let _ = writeln!(
                output,
                "{name},SSH,{host},22,{username},{description}"
            );
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device() -> DeviceRecord {
        DeviceRecord {
            site: "Berlin DC".to_string(),
            hostname: "core-sw-01".to_string(),
            ip: "10.1.0.1".to_string(),
            serial_a: String::new(),
            serial_b: String::new(),
            os_version: "15.2(4)".to_string(),
            model: "WS-C3850".to_string(),
        }
    }

    #[test]
    fn test_render_header_and_rows() {
        let output =
            XshellCsvExporter::render(&[device()], &ExportOptions::with_username("netops"));
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(
            lines.next(),
            Some("core-sw-01,SSH,10.1.0.1,22,netops,WS-C3850 15.2(4)")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_render_without_username_leaves_column_empty() {
        let output = XshellCsvExporter::render(&[device()], &ExportOptions::default());
        assert!(output.contains("core-sw-01,SSH,10.1.0.1,22,,WS-C3850 15.2(4)"));
    }
}
