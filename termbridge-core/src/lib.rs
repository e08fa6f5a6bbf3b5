//! termbridge Core Library
//!
//! This crate provides the core functionality for the termbridge bulk
//! session tool: importing delimited host files into terminal-emulator
//! session records, and exporting monitoring-system inventories into
//! vendor session-import formats.
//!
//! # Crate Structure
//!
//! - [`models`] - Core data structures (session records, protocols, emulations)
//! - [`config`] - Settings persistence, target environment, collaborator seams
//! - [`import`] - Header schema, record normalization, validation, the run engine
//! - [`session`] - Session store backends (directory, in-memory)
//! - [`inventory`] - Monitoring-system device input
//! - [`export`] - Vendor format renderers (PuTTY, SuperPuTTY, SecureCRT, Xshell)
//! - [`tracing`] - Structured logging initialization

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod inventory;
pub mod models;
pub mod session;
pub mod tracing;

pub use config::{
    ConfigManager, DEFAULT_DELIMITER, DefaultSessionSource, HostEnvironment,
    RDP_MIN_MAJOR_VERSION, Settings, StaticDefaults,
};
pub use error::{
    ConfigError, ExportError, ImportError, InventoryError, StoreError, TermBridgeError,
};
pub use export::{
    ExportFormat, ExportOptions, PuttyExporter, SecureCrtCsvExporter, SuperPuttyExporter,
    XshellCsvExporter, export_to_path,
};
pub use import::{
    DISALLOWED_CHARS, Delimiter, FieldKind, FieldSchema, ImportEngine, ImportOptions,
    ImportOutcome, ImportReport, LineRejection, NameKind, NameValidator, NameViolation,
    RESERVED_NAMES, RdpGateDenial, RecordNormalizer, RejectReason, ReportDestination,
    ReportWriter, RunState, SUPPORTED_FIELDS,
};
pub use inventory::{DeviceRecord, Inventory, SkippedDevice, load_inventory, parse_inventory};
pub use models::{
    Emulation, Protocol, ProtocolToken, SessionPath, SessionRecord, VT320_MIN_MAJOR_VERSION,
};
pub use session::{DirSessionStore, InMemorySessionStore, SESSION_FILE_EXTENSION, SessionStore};
