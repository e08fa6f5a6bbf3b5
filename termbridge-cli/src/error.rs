//! CLI error types and exit codes.

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, or other errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Import aborted - a fatal configuration error ended the import run
    pub const IMPORT_ABORTED: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Import error
    #[error("Import error: {0}")]
    Import(String),

    /// Import run aborted by a fatal configuration error
    #[error("Import aborted: {0}")]
    ImportAborted(String),

    /// Export error
    #[error("Export error: {0}")]
    Export(String),

    /// Inventory loading error
    #[error("Inventory error: {0}")]
    Inventory(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, validation, export, IO)
    /// - 2: Import aborted by a fatal configuration error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ImportAborted(_) => exit_codes::IMPORT_ABORTED,
            Self::Config(_)
            | Self::Import(_)
            | Self::Export(_)
            | Self::Inventory(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
