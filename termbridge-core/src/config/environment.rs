//! Target host environment and default-session collaborators.
//!
//! The importer writes sessions for a *target* host application (the
//! terminal emulator that will eventually load them), which may differ from
//! the machine this tool runs on. Capability gates (VT320 emulation, RDP
//! availability) are therefore driven by an explicit [`HostEnvironment`]
//! value rather than compile-time platform checks.

use crate::models::Protocol;

use super::settings::Settings;

/// Minimum host application major version for RDP sessions.
pub const RDP_MIN_MAJOR_VERSION: u32 = 9;

/// Capabilities of the target host application and platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Major version of the target host application.
    pub major_version: u32,
    /// Whether the target platform is Windows-like. Controls reserved-name
    /// checking and RDP availability.
    pub windows_like: bool,
}

impl HostEnvironment {
    /// Builds an environment from settings, detecting the platform when the
    /// settings leave it unspecified.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            major_version: settings.target_major_version,
            windows_like: settings.target_windows.unwrap_or(cfg!(windows)),
        }
    }

    /// Returns true if the target can host RDP sessions.
    #[must_use]
    pub const fn supports_rdp(&self) -> bool {
        self.major_version >= RDP_MIN_MAJOR_VERSION && self.windows_like
    }
}

/// Supplies session defaults the host application would otherwise provide.
///
/// The host emulator keeps a "Default" session whose protocol is inherited
/// by imports that specify none. Out of process, that lookup goes through
/// this seam.
pub trait DefaultSessionSource {
    /// Returns the protocol of the target's default session.
    fn default_protocol(&self) -> Protocol;
}

/// A [`DefaultSessionSource`] backed by a fixed value, used by the CLI
/// (from settings) and by tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticDefaults {
    protocol: Protocol,
}

impl StaticDefaults {
    /// Creates a source that always reports the given protocol.
    #[must_use]
    pub const fn new(protocol: Protocol) -> Self {
        Self { protocol }
    }
}

impl DefaultSessionSource for StaticDefaults {
    fn default_protocol(&self) -> Protocol {
        self.protocol
    }
}
