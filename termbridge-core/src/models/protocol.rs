//! Protocol and terminal emulation identifiers.

use serde::{Deserialize, Serialize};

/// Connection protocol of an imported session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// SSH protocol version 2
    Ssh2,
    /// SSH protocol version 1
    Ssh1,
    /// Telnet protocol
    Telnet,
    /// RLogin protocol
    RLogin,
    /// RDP protocol (Windows hosts only)
    Rdp,
}

/// Outcome of looking up a protocol token from a data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolToken {
    /// Token matched a supported protocol
    Supported(Protocol),
    /// Token named a protocol the bulk importer explicitly does not handle
    /// (`serial`, `tapi`)
    Unsupported(String),
    /// Token did not match anything; callers substitute the schema default
    /// when one was recorded
    Unrecognized(String),
}

impl Protocol {
    /// Returns the canonical spelling used in session files and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ssh2 => "SSH2",
            Self::Ssh1 => "SSH1",
            Self::Telnet => "Telnet",
            Self::RLogin => "RLogin",
            Self::Rdp => "RDP",
        }
    }

    /// Returns the default port for this protocol.
    #[must_use]
    pub const fn default_port(&self) -> u16 {
        match self {
            Self::Ssh2 | Self::Ssh1 => 22,
            Self::Telnet => 23,
            Self::RLogin => 513,
            Self::Rdp => 3389,
        }
    }

    /// Looks up a raw protocol token, case-insensitively.
    ///
    /// Any token containing `rdp` maps to RDP (the host application accepts
    /// several RDP spellings). `serial` and `tapi` are recognized but not
    /// importable in bulk. Everything else is unrecognized and left to the
    /// caller to resolve against the schema default.
    #[must_use]
    pub fn from_token(token: &str) -> ProtocolToken {
        let lower = token.trim().to_lowercase();
        match lower.as_str() {
            "ssh2" => ProtocolToken::Supported(Self::Ssh2),
            "ssh1" => ProtocolToken::Supported(Self::Ssh1),
            "telnet" => ProtocolToken::Supported(Self::Telnet),
            "rlogin" => ProtocolToken::Supported(Self::RLogin),
            "serial" | "tapi" => ProtocolToken::Unsupported(token.trim().to_string()),
            _ if lower.contains("rdp") => ProtocolToken::Supported(Self::Rdp),
            _ => ProtocolToken::Unrecognized(token.trim().to_string()),
        }
    }

    /// Parses a canonical protocol name, as recorded in a `protocol=` header
    /// default or returned by a session store.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match Self::from_token(name) {
            ProtocolToken::Supported(protocol) => Some(protocol),
            _ => None,
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimum host application major version for VT320 emulation.
pub const VT320_MIN_MAJOR_VERSION: u32 = 8;

/// Terminal emulation of an imported session.
///
/// Not applicable to RDP sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emulation {
    /// Xterm emulation
    Xterm,
    /// DEC VT100
    Vt100,
    /// DEC VT102
    Vt102,
    /// DEC VT220
    Vt220,
    /// DEC VT320 (host application 8.0 or newer)
    Vt320,
    /// ANSI emulation
    Ansi,
    /// Linux console emulation
    Linux,
    /// SCO ANSI emulation
    ScoAnsi,
    /// VShell emulation
    VShell,
    /// Wyse 50 emulation
    Wyse50,
    /// Wyse 60 emulation
    Wyse60,
}

impl Emulation {
    /// All supported emulations, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Xterm,
        Self::Vt100,
        Self::Vt102,
        Self::Vt220,
        Self::Vt320,
        Self::Ansi,
        Self::Linux,
        Self::ScoAnsi,
        Self::VShell,
        Self::Wyse50,
        Self::Wyse60,
    ];

    /// Returns the canonical spelling used in session files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Xterm => "Xterm",
            Self::Vt100 => "VT100",
            Self::Vt102 => "VT102",
            Self::Vt220 => "VT220",
            Self::Vt320 => "VT320",
            Self::Ansi => "ANSI",
            Self::Linux => "Linux",
            Self::ScoAnsi => "SCOANSI",
            Self::VShell => "VShell",
            Self::Wyse50 => "WYSE50",
            Self::Wyse60 => "WYSE60",
        }
    }

    /// Looks up a raw emulation token, case-insensitively.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let lower = token.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|e| e.as_str().to_lowercase() == lower)
            .copied()
    }

    /// Returns true if this emulation is available on the given host
    /// application major version.
    #[must_use]
    pub const fn available_in(&self, major_version: u32) -> bool {
        match self {
            Self::Vt320 => major_version >= VT320_MIN_MAJOR_VERSION,
            _ => true,
        }
    }
}

impl std::fmt::Display for Emulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
