//! SuperPuTTY session XML exporter.
//!
//! Produces the `ArrayOfSessionData` document SuperPuTTY's session import
//! dialog reads. Devices are filed under their site name via the session
//! id, which doubles as the folder path in SuperPuTTY's tree.

use serde::Serialize;

use crate::error::ExportError;
use crate::inventory::DeviceRecord;

use super::ExportOptions;

/// SSH port stamped into every exported session.
const SSH_PORT: u16 = 22;

#[derive(Debug, Serialize)]
#[serde(rename = "ArrayOfSessionData")]
struct ArrayOfSessionData {
    #[serde(rename = "SessionData")]
    sessions: Vec<SessionData>,
}

#[derive(Debug, Serialize)]
struct SessionData {
    #[serde(rename = "@SessionId")]
    session_id: String,
    #[serde(rename = "@SessionName")]
    session_name: String,
    #[serde(rename = "@ImageKey")]
    image_key: String,
    #[serde(rename = "@Host")]
    host: String,
    #[serde(rename = "@Port")]
    port: u16,
    #[serde(rename = "@Proto")]
    proto: String,
    #[serde(rename = "@PuttySession")]
    putty_session: String,
    #[serde(rename = "@Username")]
    username: String,
}

/// Exporter for the SuperPuTTY session XML format.
pub struct SuperPuttyExporter;

impl SuperPuttyExporter {
    /// Renders the session document.
    ///
    /// # Errors
    ///
    /// Returns an error when XML serialization fails.
    pub fn render(
        devices: &[DeviceRecord],
        options: &ExportOptions,
    ) -> Result<String, ExportError> {
        let document = ArrayOfSessionData {
            sessions: devices
                .iter()
                .map(|device| Self::session_data(device, options.username()))
                .collect(),
        };
        let body = quick_xml::se::to_string(&document).map_err(|e| ExportError::Render {
            format: "superputty",
            reason: e.to_string(),
        })?;
        Ok(format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n{body}"))
    }

    fn session_data(device: &DeviceRecord, username: &str) -> SessionData {
        let hostname = device.hostname.trim();
        let session_id = if device.folder().is_empty() {
            hostname.to_string()
        } else {
            format!("{}/{}", device.folder(), hostname)
        };
        SessionData {
            session_id,
            session_name: hostname.to_string(),
            image_key: "computer".to_string(),
            host: device.ip.trim().to_string(),
            port: SSH_PORT,
            proto: "SSH".to_string(),
            putty_session: "Default Settings".to_string(),
            username: username.to_string(),
        }
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
            os_version: String::new(),
            model: String::new(),
        }
    }

    #[test]
    fn test_render_session_attributes() {
        let output = SuperPuttyExporter::render(
            &[device()],
            &ExportOptions::with_username("netops"),
        )
        .expect("render");
        assert!(output.starts_with("<?xml version=\"1.0\""));
        assert!(output.contains("<ArrayOfSessionData>"));
        assert!(output.contains("SessionId=\"Berlin DC/core-sw-01\""));
        assert!(output.contains("Host=\"10.1.0.1\""));
        assert!(output.contains("Proto=\"SSH\""));
        assert!(output.contains("Port=\"22\""));
        assert!(output.contains("Username=\"netops\""));
    }

    #[test]
    fn test_render_without_site_uses_bare_name() {
        let mut bare = device();
        bare.site = String::new();
        let output =
            SuperPuttyExporter::render(&[bare], &ExportOptions::default()).expect("render");
        assert!(output.contains("SessionId=\"core-sw-01\""));
    }
}
