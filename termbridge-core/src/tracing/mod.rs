//! Tracing integration for structured logging.
//!
//! Thin wrapper over `tracing-subscriber` so the CLI (and tests) can
//! initialize logging from a level and output choice without repeating the
//! subscriber plumbing.

use std::sync::OnceLock;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Set once the global subscriber has been installed.
static TRACING_INITIALIZED: OnceLock<TracingConfig> = OnceLock::new();

/// Errors that can occur during tracing initialization.
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to install the global subscriber.
    #[error("failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing was already initialized in this process.
    #[error("tracing has already been initialized")]
    AlreadyInitialized,
}

/// Result type for tracing operations.
pub type TracingResult<T> = Result<T, TracingError>;

/// Log level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Errors, warnings, and info
    Info,
    /// All above plus debug messages
    Debug,
    /// All messages including trace
    Trace,
}

impl TracingLevel {
    /// Converts to the tracing crate's `Level`.
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Maps a `-v` occurrence count to a level.
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{name}")
    }
}

/// Configuration for tracing initialization.
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level; overridden by `RUST_LOG` when that is set.
    pub level: TracingLevel,
    /// Write to stdout instead of stderr.
    pub use_stdout: bool,
}

/// Installs the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise uses the configured level.
///
/// # Errors
///
/// Returns an error when a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.get().is_some() {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = if config.use_stdout {
        builder.try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };
    result.map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    let _ = TRACING_INITIALIZED.set(config.clone());
    Ok(())
}

/// Returns true if tracing has been initialized by this module.
#[must_use]
pub fn is_tracing_initialized() -> bool {
    TRACING_INITIALIZED.get().is_some()
}
