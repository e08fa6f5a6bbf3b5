//! Session and folder name validation.
//!
//! Both checks are table-driven so tests can enumerate the tables directly:
//! a disallowed-character set shared by session and folder names, and a
//! reserved-device-name list that applies on Windows-like targets.

/// Characters that may not appear in any name component.
pub const DISALLOWED_CHARS: &[char] = &['|', ':', '*', '?', '"', '<', '>'];

/// Device names reserved by Windows; a session may not be named after one,
/// and no folder path segment may equal one.
pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM0", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
    "COM8", "COM9", "LPT0", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8",
    "LPT9",
];

/// What kind of name component is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// A session name. May not contain `/`.
    Session,
    /// A folder path. `/` separates sub-folder segments.
    Folder,
}

impl NameKind {
    /// Returns the component kind as used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Folder => "folder",
        }
    }
}

/// A failed name check, carrying what offended and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameViolation {
    /// The component contains a character from [`DISALLOWED_CHARS`] (or `/`
    /// in a session name).
    DisallowedCharacter {
        /// Kind of component checked.
        kind: NameKind,
        /// The component as given in the input.
        component: String,
        /// The first offending character found.
        character: char,
    },
    /// The component is, or contains as a path segment, a reserved device
    /// name.
    ReservedName {
        /// Kind of component checked.
        kind: NameKind,
        /// The component as given in the input.
        component: String,
        /// The reserved name that matched, in its canonical spelling.
        name: String,
    },
}

impl std::fmt::Display for NameViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DisallowedCharacter {
                kind,
                component,
                character,
            } => write!(
                f,
                "invalid character '{character}' in {} name \"{component}\"",
                kind.as_str()
            ),
            Self::ReservedName {
                kind,
                component,
                name,
            } => write!(
                f,
                "invalid {} name \"{component}\": '{name}' is a reserved name on Windows",
                kind.as_str()
            ),
        }
    }
}

/// Validates session and folder name components.
#[derive(Debug, Clone, Copy)]
pub struct NameValidator {
    windows_like: bool,
}

impl NameValidator {
    /// Creates a validator. Reserved-name checking only applies when the
    /// target environment is Windows-like.
    #[must_use]
    pub const fn new(windows_like: bool) -> Self {
        Self { windows_like }
    }

    /// Validates one name component.
    ///
    /// # Errors
    ///
    /// Returns the first [`NameViolation`] found. Character checks run
    /// before reserved-name checks, matching the order operators see in
    /// the host application's own error reporting.
    pub fn validate(&self, component: &str, kind: NameKind) -> Result<(), NameViolation> {
        if let Some(character) = component.chars().find(|c| {
            DISALLOWED_CHARS.contains(c) || (kind == NameKind::Session && *c == '/')
        }) {
            return Err(NameViolation::DisallowedCharacter {
                kind,
                component: component.to_string(),
                character,
            });
        }

        if self.windows_like
            && let Some(name) = Self::reserved_match(component, kind)
        {
            return Err(NameViolation::ReservedName {
                kind,
                component: component.to_string(),
                name,
            });
        }

        Ok(())
    }

    /// Finds a reserved-name match: the whole component for sessions, any
    /// `/`-separated segment for folders.
    fn reserved_match(component: &str, kind: NameKind) -> Option<String> {
        let matches_reserved = |segment: &str| {
            RESERVED_NAMES
                .iter()
                .find(|r| segment.eq_ignore_ascii_case(r))
                .map(|r| (*r).to_string())
        };
        match kind {
            NameKind::Session => matches_reserved(component.trim()),
            NameKind::Folder => component
                .split('/')
                .filter(|segment| !segment.is_empty())
                .find_map(|segment| matches_reserved(segment.trim())),
        }
    }
}
