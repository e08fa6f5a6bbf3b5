//! Header parsing: field schema, delimiters, and default annotations.
//!
//! The first line of an import file designates the meaning of every column.
//! It is parsed exactly once per run; the resulting [`FieldSchema`] is
//! immutable for the rest of the run.

use tracing::debug;

use crate::config::DefaultSessionSource;
use crate::error::ImportError;
use crate::models::Protocol;

/// The supported field vocabulary, for error messages.
pub const SUPPORTED_FIELDS: &str =
    "description,emulation,folder,hostname,port,protocol,session_name,username,logon_script,domain";

/// Meaning of one column in an import file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Display name for the session; defaults to `hostname` when absent
    SessionName,
    /// Relative folder path in the session tree
    Folder,
    /// Remote host name or IP (the only required field)
    Hostname,
    /// Connection protocol
    Protocol,
    /// Remote port
    Port,
    /// Remote account name
    Username,
    /// Terminal emulation
    Emulation,
    /// Description line; may occur in several columns
    Description,
    /// Logon script path
    LogonScript,
    /// Windows domain (RDP sessions)
    Domain,
}

impl FieldKind {
    /// Returns the canonical field name as written in a header line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SessionName => "session_name",
            Self::Folder => "folder",
            Self::Hostname => "hostname",
            Self::Protocol => "protocol",
            Self::Port => "port",
            Self::Username => "username",
            Self::Emulation => "emulation",
            Self::Description => "description",
            Self::LogonScript => "logon_script",
            Self::Domain => "domain",
        }
    }

    /// Looks up a header token, case-insensitively, after trimming.
    ///
    /// This is an exact-name lookup: a custom field that merely *contains* a
    /// supported name (`my_hostname`) does not match.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "session_name" => Some(Self::SessionName),
            "folder" => Some(Self::Folder),
            "hostname" => Some(Self::Hostname),
            "protocol" => Some(Self::Protocol),
            "port" => Some(Self::Port),
            "username" => Some(Self::Username),
            "emulation" => Some(Self::Emulation),
            "description" => Some(Self::Description),
            "logon_script" => Some(Self::LogonScript),
            "domain" => Some(Self::Domain),
            _ => None,
        }
    }

    /// Returns true if a `name=value` default annotation is supported for
    /// this field.
    #[must_use]
    pub const fn supports_default(&self) -> bool {
        matches!(self, Self::Protocol | Self::Folder | Self::Username)
    }
}

/// Field separator of an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimiter {
    /// Fields are separated by this text (single or multi character). The
    /// header line must contain it.
    Text(String),
    /// The header is a single field. Data lines are still split by the
    /// configured text, so a stray delimiter inside a value is caught as a
    /// field-count mismatch instead of silently merging into the field.
    /// Selected by answering `NONE` at the delimiter prompt.
    SingleField(String),
}

impl Delimiter {
    /// Resolves an operator's answer to the delimiter prompt: the literal
    /// `NONE` (any case) accepts a single-field header while keeping the
    /// configured delimiter for data lines; anything else becomes the new
    /// delimiter.
    #[must_use]
    pub fn resolve_override(answer: &str, configured: &str) -> Self {
        if answer.eq_ignore_ascii_case("none") {
            Self::SingleField(configured.to_string())
        } else {
            Self::Text(answer.to_string())
        }
    }

    /// Splits a data line into field tokens.
    #[must_use]
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Self::Text(sep) | Self::SingleField(sep) => line.split(sep.as_str()).collect(),
        }
    }

    /// Splits the header line into field tokens.
    #[must_use]
    pub fn split_header<'a>(&self, header: &'a str) -> Vec<&'a str> {
        match self {
            Self::Text(sep) => header.split(sep.as_str()).collect(),
            Self::SingleField(_) => vec![header],
        }
    }

    /// Returns true if this delimiter is acceptable for the given header
    /// line. A single-field delimiter accepts any header.
    #[must_use]
    pub fn occurs_in(&self, header: &str) -> bool {
        match self {
            Self::Text(sep) => header.contains(sep.as_str()),
            Self::SingleField(_) => true,
        }
    }

    /// Renders the delimiter for messages, spelling out non-printable
    /// single characters as `ASCII[n]`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Text(sep) => {
                let mut chars = sep.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !(' '..='~').contains(&c) => {
                        format!("ASCII[{}]", c as u32)
                    }
                    _ => sep.clone(),
                }
            }
            Self::SingleField(_) => "NONE".to_string(),
        }
    }
}

/// The parsed header of an import file.
///
/// Holds the ordered column meanings, the resolved delimiter, and any
/// defaults recorded from `name=value` annotations. Read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    fields: Vec<FieldKind>,
    delimiter: Delimiter,
    default_protocol: Option<Protocol>,
    default_folder: Option<String>,
    default_username: Option<String>,
}

impl FieldSchema {
    /// Parses a header line against a configured delimiter.
    ///
    /// When the header carries neither a `protocol` column nor a
    /// `protocol=` default, the fallback protocol is taken from the
    /// default-session collaborator so that every later record resolves to
    /// a concrete protocol.
    ///
    /// # Errors
    ///
    /// All header errors are fatal for the run: [`ImportError::MissingDelimiter`],
    /// [`ImportError::MissingRequiredField`], [`ImportError::UnknownField`],
    /// [`ImportError::DuplicateField`], [`ImportError::UnsupportedDefault`],
    /// and [`ImportError::InvalidDefaultProtocol`].
    pub fn parse(
        header: &str,
        delimiter: Delimiter,
        defaults: &dyn DefaultSessionSource,
    ) -> Result<Self, ImportError> {
        if !delimiter.occurs_in(header) {
            return Err(ImportError::MissingDelimiter(delimiter.display_name()));
        }

        let mut fields = Vec::new();
        let mut default_protocol = None;
        let mut default_folder = None;
        let mut default_username = None;

        for token in delimiter.split_header(header) {
            let token = token.trim();
            let (name, default_value) = match token.split_once('=') {
                Some((name, value)) => (name, Some(value.trim())),
                None => (token, None),
            };

            let Some(kind) = FieldKind::from_name(name) else {
                return Err(ImportError::UnknownField {
                    name: token.to_string(),
                    supported: SUPPORTED_FIELDS,
                });
            };

            if kind != FieldKind::Description && fields.contains(&kind) {
                return Err(ImportError::DuplicateField(kind.as_str().to_string()));
            }

            if let Some(value) = default_value {
                if !kind.supports_default() {
                    return Err(ImportError::UnsupportedDefault(kind.as_str().to_string()));
                }
                // An empty value (`protocol=`) records nothing
                if !value.is_empty() {
                    match kind {
                        FieldKind::Protocol => {
                            default_protocol = Some(Protocol::from_name(value).ok_or_else(
                                || ImportError::InvalidDefaultProtocol(value.to_string()),
                            )?);
                        }
                        FieldKind::Folder => default_folder = Some(value.to_string()),
                        FieldKind::Username => default_username = Some(value.to_string()),
                        _ => unreachable!("supports_default covers these kinds"),
                    }
                }
            }

            fields.push(kind);
        }

        if !fields.contains(&FieldKind::Hostname) {
            return Err(ImportError::MissingRequiredField);
        }

        if !fields.contains(&FieldKind::Protocol) && default_protocol.is_none() {
            default_protocol = Some(defaults.default_protocol());
        }

        debug!(
            columns = fields.len(),
            delimiter = %delimiter.display_name(),
            "header parsed"
        );

        Ok(Self {
            fields,
            delimiter,
            default_protocol,
            default_folder,
            default_username,
        })
    }

    /// Returns the ordered column meanings.
    #[must_use]
    pub fn fields(&self) -> &[FieldKind] {
        &self.fields
    }

    /// Returns the number of columns every data line must have.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the resolved delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Returns the recorded default protocol, if any.
    #[must_use]
    pub fn default_protocol(&self) -> Option<Protocol> {
        self.default_protocol
    }

    /// Returns the recorded default folder, if any.
    #[must_use]
    pub fn default_folder(&self) -> Option<&str> {
        self.default_folder.as_deref()
    }

    /// Returns the recorded default username, if any.
    #[must_use]
    pub fn default_username(&self) -> Option<&str> {
        self.default_username.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticDefaults;

    const DEFAULTS: StaticDefaults = StaticDefaults::new(Protocol::Telnet);

    fn comma() -> Delimiter {
        Delimiter::Text(",".to_string())
    }

    #[test]
    fn test_parse_basic_header() {
        let schema =
            FieldSchema::parse("hostname,username,folder,protocol", comma(), &DEFAULTS)
                .expect("parse");
        assert_eq!(
            schema.fields(),
            &[
                FieldKind::Hostname,
                FieldKind::Username,
                FieldKind::Folder,
                FieldKind::Protocol
            ]
        );
        assert_eq!(schema.default_protocol(), None);
    }

    #[test]
    fn test_parse_header_case_insensitive() {
        let schema =
            FieldSchema::parse("HostName,UserName", comma(), &DEFAULTS).expect("parse");
        assert_eq!(schema.fields()[0], FieldKind::Hostname);
    }

    #[test]
    fn test_parse_header_with_defaults() {
        let schema = FieldSchema::parse(
            "hostname,protocol=SSH2,folder=_imported,username=root",
            comma(),
            &DEFAULTS,
        )
        .expect("parse");
        assert_eq!(schema.default_protocol(), Some(Protocol::Ssh2));
        assert_eq!(schema.default_folder(), Some("_imported"));
        assert_eq!(schema.default_username(), Some("root"));
        assert_eq!(schema.len(), 4);
    }

    #[test]
    fn test_missing_hostname_is_fatal() {
        let err = FieldSchema::parse("username,protocol", comma(), &DEFAULTS).unwrap_err();
        assert!(matches!(err, ImportError::MissingRequiredField));
    }

    #[test]
    fn test_missing_delimiter_is_fatal() {
        let err = FieldSchema::parse("hostname", comma(), &DEFAULTS).unwrap_err();
        assert!(matches!(err, ImportError::MissingDelimiter(_)));
    }

    #[test]
    fn test_single_field_header() {
        let schema = FieldSchema::parse(
            "hostname",
            Delimiter::SingleField(",".to_string()),
            &DEFAULTS,
        )
        .expect("parse");
        assert_eq!(schema.fields(), &[FieldKind::Hostname]);
        // No protocol column, no annotation: fallback protocol is inherited
        assert_eq!(schema.default_protocol(), Some(Protocol::Telnet));
        // Data lines still split by the configured delimiter
        assert_eq!(schema.delimiter().split("10.0.0.1,extra").len(), 2);
    }

    #[test]
    fn test_resolve_override() {
        assert_eq!(
            Delimiter::resolve_override("NONE", ","),
            Delimiter::SingleField(",".to_string())
        );
        assert_eq!(
            Delimiter::resolve_override(";", ","),
            Delimiter::Text(";".to_string())
        );
    }

    #[test]
    fn test_unknown_field_is_fatal() {
        let err = FieldSchema::parse("hostname,rack_unit", comma(), &DEFAULTS).unwrap_err();
        match err {
            ImportError::UnknownField { name, .. } => assert_eq!(name, "rack_unit"),
            other => panic!("expected UnknownField, got {other:?}"),
        }
    }

    #[test]
    fn test_substring_field_name_does_not_match() {
        let err = FieldSchema::parse("hostname,my_hostname", comma(), &DEFAULTS).unwrap_err();
        assert!(matches!(err, ImportError::UnknownField { .. }));
    }

    #[test]
    fn test_duplicate_field_is_fatal() {
        let err = FieldSchema::parse("hostname,port,port", comma(), &DEFAULTS).unwrap_err();
        assert!(matches!(err, ImportError::DuplicateField(_)));
    }

    #[test]
    fn test_duplicate_description_is_allowed() {
        let schema = FieldSchema::parse(
            "hostname,description,description",
            comma(),
            &DEFAULTS,
        )
        .expect("parse");
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_default_on_unsupported_field_is_fatal() {
        let err = FieldSchema::parse("hostname,port=22", comma(), &DEFAULTS).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedDefault(_)));
    }

    #[test]
    fn test_invalid_default_protocol_is_fatal() {
        let err =
            FieldSchema::parse("hostname,protocol=gopher", comma(), &DEFAULTS).unwrap_err();
        assert!(matches!(err, ImportError::InvalidDefaultProtocol(_)));
    }

    #[test]
    fn test_empty_default_annotation_records_nothing() {
        let schema =
            FieldSchema::parse("hostname,protocol=", comma(), &DEFAULTS).expect("parse");
        // Column exists, so the collaborator fallback does not kick in either
        assert_eq!(schema.default_protocol(), None);
    }

    #[test]
    fn test_delimiter_display_name() {
        assert_eq!(Delimiter::Text(",".to_string()).display_name(), ",");
        assert_eq!(Delimiter::Text("\t".to_string()).display_name(), "ASCII[9]");
        assert_eq!(Delimiter::Text("|||".to_string()).display_name(), "|||");
        assert_eq!(
            Delimiter::SingleField(",".to_string()).display_name(),
            "NONE"
        );
    }

    #[test]
    fn test_multichar_delimiter_split() {
        let schema = FieldSchema::parse(
            "hostname|||username",
            Delimiter::Text("|||".to_string()),
            &DEFAULTS,
        )
        .expect("parse");
        assert_eq!(schema.len(), 2);
    }
}
