//! Normalized session records and store paths.

use serde::{Deserialize, Serialize};

use super::protocol::{Emulation, Protocol};

/// A fully validated session record, ready to hand to a session store.
///
/// Produced once per accepted data line and consumed immediately; the
/// importer never mutates a record after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Display name of the session. Never empty; falls back to `hostname`
    /// when the input had no `session_name` column or an empty value.
    pub session_name: String,
    /// Remote host name or IP address. Never empty.
    pub hostname: String,
    /// Connection protocol.
    pub protocol: Protocol,
    /// Remote port, when the input specified one.
    pub port: Option<u16>,
    /// Account name on the remote host.
    pub username: Option<String>,
    /// Terminal emulation. Not set for RDP sessions.
    pub emulation: Option<Emulation>,
    /// Folder path the session is filed under, relative, `/`-separated.
    pub folder: Option<String>,
    /// Description lines shown in the session's comment field.
    pub description: Vec<String>,
    /// Path to a logon script executed on connect. Not set for RDP.
    pub logon_script: Option<String>,
    /// Windows domain, meaningful for RDP sessions only.
    pub domain: Option<String>,
}

impl SessionRecord {
    /// Returns the port to persist, substituting the protocol default when
    /// the input line left it empty.
    #[must_use]
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.protocol.default_port())
    }

    /// Returns the username to persist for the session, combining the
    /// Windows domain for RDP sessions the way the host application expects
    /// (`DOMAIN\user`).
    #[must_use]
    pub fn qualified_username(&self) -> Option<String> {
        let username = self.username.as_deref()?;
        match (self.protocol, self.domain.as_deref()) {
            (Protocol::Rdp, Some(domain)) if !domain.is_empty() => {
                Some(format!("{domain}\\{username}"))
            }
            _ => Some(username.to_string()),
        }
    }
}

/// Composite key a session is stored under: optional folder plus name.
///
/// Rendered as `folder/name` with leading separators stripped, matching the
/// host application's session tree addressing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionPath(String);

impl SessionPath {
    /// Builds a path from an optional folder and a session name.
    #[must_use]
    pub fn new(folder: Option<&str>, name: &str) -> Self {
        let joined = match folder {
            Some(folder) if !folder.trim().is_empty() => {
                format!("{}/{}", folder.trim(), name.trim())
            }
            _ => name.trim().to_string(),
        };
        Self(joined.trim_start_matches('/').to_string())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a sibling path with a suffix appended to the name component.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self(format!("{}{suffix}", self.0))
    }
}

impl std::fmt::Display for SessionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
