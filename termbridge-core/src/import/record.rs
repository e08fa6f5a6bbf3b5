//! Per-line record normalization and validation.
//!
//! [`RecordNormalizer::normalize`] is a pure function of the line, the
//! schema, and the target environment: the same line always yields the same
//! record. A failing line reports *every* field problem found, not just the
//! first, so an operator can fix a line in one pass.

use crate::config::{HostEnvironment, RDP_MIN_MAJOR_VERSION};
use crate::models::{Emulation, Protocol, ProtocolToken, SessionRecord};

use super::names::{NameKind, NameValidator, NameViolation};
use super::schema::{FieldKind, FieldSchema};

/// Why the RDP protocol gate refused a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdpGateDenial {
    /// The target host application predates RDP support.
    VersionTooOld {
        /// Target major version.
        actual: u32,
    },
    /// The target platform is not Windows-like.
    NotWindows,
}

/// Why a data line was rejected. Recoverable: the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The line has fewer fields than the header.
    InsufficientData {
        /// Fields found on the line.
        got: usize,
        /// Fields the header designates.
        expected: usize,
    },
    /// The line has more fields than the header, usually because a value
    /// contains the delimiter.
    FieldCountMismatch {
        /// Fields found on the line.
        got: usize,
        /// Fields the header designates.
        expected: usize,
    },
    /// A non-empty port value that is not a positive number.
    InvalidPort(String),
    /// A protocol the bulk importer explicitly does not handle.
    UnsupportedProtocol(String),
    /// An unrecognized protocol with no schema default to fall back to.
    InvalidProtocol(String),
    /// The hostname field is present but empty.
    EmptyHostname,
    /// An unrecognized emulation value.
    InvalidEmulation(String),
    /// An emulation the target host application version cannot provide.
    UnsupportedEmulationVersion {
        /// The requested emulation.
        emulation: Emulation,
        /// Minimum major version required.
        required: u32,
        /// Target major version.
        actual: u32,
    },
    /// A session or folder name failed validation.
    Name(NameViolation),
    /// RDP requested against a target that cannot host it.
    UnsupportedRdpEnvironment(RdpGateDenial),
    /// A field that RDP sessions cannot carry (emulation, logon script).
    UnsupportedRdpOption(&'static str),
}

impl From<NameViolation> for RejectReason {
    fn from(violation: NameViolation) -> Self {
        Self::Name(violation)
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientData { got, expected } => {
                write!(f, "insufficient data ({got} of {expected} fields)")
            }
            Self::FieldCountMismatch { got, expected } => write!(
                f,
                "number of data fields ({got}) does not match the number of fields in the \
                 header ({expected}); does a value contain the delimiter?"
            ),
            Self::InvalidPort(value) => write!(f, "invalid port {value:?}"),
            Self::UnsupportedProtocol(value) => {
                write!(f, "unsupported protocol {value:?}")
            }
            Self::InvalidProtocol(value) => write!(f, "invalid protocol {value:?}"),
            Self::EmptyHostname => write!(f, "hostname field is empty"),
            Self::InvalidEmulation(value) => write!(f, "invalid emulation {value:?}"),
            Self::UnsupportedEmulationVersion {
                emulation,
                required,
                actual,
            } => write!(
                f,
                "{emulation} emulation requires host application version {required}.0 or \
                 newer (target is {actual}.x)"
            ),
            Self::Name(violation) => write!(f, "{violation}"),
            Self::UnsupportedRdpEnvironment(RdpGateDenial::VersionTooOld { actual }) => write!(
                f,
                "RDP protocol support requires host application version \
                 {RDP_MIN_MAJOR_VERSION}.0 or newer (target is {actual}.x)"
            ),
            Self::UnsupportedRdpEnvironment(RdpGateDenial::NotWindows) => {
                write!(f, "RDP protocol support is only available on Windows targets")
            }
            Self::UnsupportedRdpOption(field) => {
                write!(f, "{field} is not supported for RDP sessions")
            }
        }
    }
}

/// A rejected data line: where it was, what it said, and everything wrong
/// with it. The verbatim text is kept so a corrected file can be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRejection {
    /// 1-based line number in the input file.
    pub line_number: usize,
    /// The line exactly as read, without the trailing line break.
    pub line: String,
    /// All problems found on the line, in field order.
    pub reasons: Vec<RejectReason>,
}

/// Normalizes data lines against a parsed schema.
#[derive(Debug, Clone)]
pub struct RecordNormalizer<'a> {
    schema: &'a FieldSchema,
    environment: HostEnvironment,
    names: NameValidator,
}

impl<'a> RecordNormalizer<'a> {
    /// Creates a normalizer for one run.
    #[must_use]
    pub const fn new(schema: &'a FieldSchema, environment: HostEnvironment) -> Self {
        Self {
            schema,
            environment,
            names: NameValidator::new(environment.windows_like),
        }
    }

    /// Normalizes one data line into a [`SessionRecord`].
    ///
    /// # Errors
    ///
    /// Returns every [`RejectReason`] found on the line. The list is never
    /// empty on the error path.
    pub fn normalize(&self, line: &str) -> Result<SessionRecord, Vec<RejectReason>> {
        let tokens = self.schema.delimiter().split(line);
        let expected = self.schema.len();
        if tokens.len() < expected {
            return Err(vec![RejectReason::InsufficientData {
                got: tokens.len(),
                expected,
            }]);
        }
        if tokens.len() > expected {
            return Err(vec![RejectReason::FieldCountMismatch {
                got: tokens.len(),
                expected,
            }]);
        }

        let mut reasons = Vec::new();
        let mut session_name = String::new();
        let mut hostname = String::new();
        let mut protocol: Option<Protocol> = None;
        let mut port: Option<u16> = None;
        let mut username: Option<String> = None;
        let mut emulation: Option<Emulation> = None;
        let mut folder: Option<String> = None;
        let mut description: Vec<String> = Vec::new();
        let mut logon_script: Option<String> = None;
        let mut domain: Option<String> = None;

        for (kind, raw) in self.schema.fields().iter().zip(&tokens) {
            let value = raw.trim();
            match kind {
                FieldKind::SessionName => session_name = value.to_string(),
                FieldKind::Hostname => {
                    if value.is_empty() {
                        reasons.push(RejectReason::EmptyHostname);
                    } else {
                        hostname = value.to_string();
                    }
                }
                FieldKind::Port => {
                    if !value.is_empty() {
                        match Self::parse_port(value) {
                            Some(parsed) => port = Some(parsed),
                            None => reasons.push(RejectReason::InvalidPort(value.to_string())),
                        }
                    }
                }
                FieldKind::Protocol => match Protocol::from_token(value) {
                    ProtocolToken::Supported(found) => protocol = Some(found),
                    ProtocolToken::Unsupported(token) => {
                        reasons.push(RejectReason::UnsupportedProtocol(token));
                    }
                    ProtocolToken::Unrecognized(token) => {
                        match self.schema.default_protocol() {
                            Some(default) => protocol = Some(default),
                            None => reasons.push(RejectReason::InvalidProtocol(token)),
                        }
                    }
                },
                FieldKind::Username => {
                    if !value.is_empty() {
                        username = Some(value.to_string());
                    }
                }
                FieldKind::Emulation => match Emulation::from_token(value) {
                    Some(found) => {
                        if found.available_in(self.environment.major_version) {
                            emulation = Some(found);
                        } else {
                            reasons.push(RejectReason::UnsupportedEmulationVersion {
                                emulation: found,
                                required: crate::models::VT320_MIN_MAJOR_VERSION,
                                actual: self.environment.major_version,
                            });
                        }
                    }
                    None => reasons.push(RejectReason::InvalidEmulation(value.to_string())),
                },
                FieldKind::Folder => {
                    if !value.is_empty() {
                        folder = Some(value.to_string());
                    }
                }
                FieldKind::Description => {
                    if !value.is_empty() {
                        // Literal \r sequences inside one column split into
                        // further description lines
                        description.extend(value.split("\\r").map(str::to_string));
                    }
                }
                FieldKind::LogonScript => {
                    if !value.is_empty() {
                        logon_script = Some(value.to_string());
                    }
                }
                FieldKind::Domain => {
                    if !value.is_empty() {
                        domain = Some(value.to_string());
                    }
                }
            }
        }

        // Schema-level defaults for columns that were absent or empty
        let protocol = protocol.or_else(|| self.schema.default_protocol());
        if folder.is_none() {
            folder = self.schema.default_folder().map(str::to_string);
        }
        if username.is_none() {
            username = self.schema.default_username().map(str::to_string);
        }
        if session_name.is_empty() {
            session_name.clone_from(&hostname);
        }

        if let Err(violation) = self.names.validate(&session_name, NameKind::Session) {
            reasons.push(violation.into());
        }
        if let Some(ref folder) = folder
            && let Err(violation) = self.names.validate(folder, NameKind::Folder)
        {
            reasons.push(violation.into());
        }

        if protocol == Some(Protocol::Rdp) {
            if self.environment.major_version < RDP_MIN_MAJOR_VERSION {
                reasons.push(RejectReason::UnsupportedRdpEnvironment(
                    RdpGateDenial::VersionTooOld {
                        actual: self.environment.major_version,
                    },
                ));
            } else if !self.environment.windows_like {
                reasons.push(RejectReason::UnsupportedRdpEnvironment(
                    RdpGateDenial::NotWindows,
                ));
            }
            if emulation.is_some() {
                reasons.push(RejectReason::UnsupportedRdpOption("emulation"));
            }
            if logon_script.is_some() {
                reasons.push(RejectReason::UnsupportedRdpOption("logon script"));
            }
        }

        if !reasons.is_empty() {
            return Err(reasons);
        }

        let Some(protocol) = protocol else {
            // Unreachable per schema construction; surfaced as a rejection
            // rather than a panic if a store-provided schema breaks the rule
            return Err(vec![RejectReason::InvalidProtocol(String::new())]);
        };

        Ok(SessionRecord {
            session_name,
            hostname,
            protocol,
            port,
            username,
            emulation,
            folder,
            description,
            logon_script,
            domain,
        })
    }

    /// Parses a port value: all ASCII digits, non-zero, fits in a `u16`.
    fn parse_port(value: &str) -> Option<u16> {
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match value.parse::<u16>() {
            Ok(0) | Err(_) => None,
            Ok(port) => Some(port),
        }
    }
}
