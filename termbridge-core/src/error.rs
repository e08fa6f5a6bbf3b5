//! Error types for the termbridge core library.
//!
//! Fatal conditions (a mis-specified header, a store that did not honor the
//! requested protocol) are errors and abort a run. Per-line data problems
//! are *not* errors; they are [`RejectReason`](crate::import::RejectReason)
//! values collected into the import report while the run continues.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal import errors. Any of these aborts the entire run.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The required `hostname` field is absent from the header line.
    #[error("invalid header line: 'hostname' field is required")]
    MissingRequiredField,

    /// The configured delimiter does not occur in the header line and no
    /// override was supplied.
    #[error("delimiter {0:?} not found in the header line")]
    MissingDelimiter(String),

    /// A header token is not in the supported field vocabulary.
    #[error("unknown field designation {name:?}; supported fields are: {supported}")]
    UnknownField {
        /// The offending header token, verbatim.
        name: String,
        /// Comma-separated list of supported field names.
        supported: &'static str,
    },

    /// A non-description field occurs more than once in the header.
    #[error("field {0:?} occurs more than once in the header line")]
    DuplicateField(String),

    /// A `name=value` default annotation on a field that does not support
    /// defaulting (only protocol, folder, and username do).
    #[error("field {0:?} does not support a default value annotation")]
    UnsupportedDefault(String),

    /// The `protocol=` header default names a protocol the importer cannot
    /// create sessions for.
    #[error("default protocol {0:?} in the header line is not a supported protocol")]
    InvalidDefaultProtocol(String),

    /// The session store reported a different protocol than the one
    /// requested immediately after creating a record.
    #[error("store did not honor protocol for {path}: expected {expected}, got {actual}")]
    ProtocolMismatch {
        /// Path of the record that was just created.
        path: String,
        /// Protocol the importer requested.
        expected: String,
        /// Protocol the store reported back.
        actual: String,
    },

    /// A session store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reading the input file failed.
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a session store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The resolved session path cannot be represented by this backend.
    #[error("invalid session path {0:?}")]
    InvalidPath(String),

    /// Writing the session record failed.
    #[error("failed to persist session {path:?}: {source}")]
    Io {
        /// Session path being written.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors from the vendor-format exporters.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serializing the output document failed.
    #[error("failed to render {format} output: {reason}")]
    Render {
        /// Target format name.
        format: &'static str,
        /// Human-readable failure description.
        reason: String,
    },

    /// Writing the output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors loading a monitoring-system inventory dump.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The inventory file could not be read.
    #[error("failed to read inventory file: {0}")]
    Io(#[from] std::io::Error),

    /// The inventory document is not a JSON array of device objects.
    #[error("failed to parse inventory JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors loading or saving the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read or written.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No user configuration directory could be resolved.
    #[error("no configuration directory available")]
    NoConfigDir,
}

/// Umbrella error for callers that do not care which subsystem failed.
#[derive(Debug, Error)]
pub enum TermBridgeError {
    /// Import pipeline error
    #[error(transparent)]
    Import(#[from] ImportError),
    /// Session store error
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Exporter error
    #[error(transparent)]
    Export(#[from] ExportError),
    /// Inventory loading error
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    /// Settings error
    #[error(transparent)]
    Config(#[from] ConfigError),
}
