//! Configuration management for termbridge
//!
//! This module provides the `ConfigManager` for loading and saving settings
//! in TOML format, plus the target host environment and default-session
//! collaborator seams used by the import pipeline.

mod environment;
mod manager;
mod settings;

pub use environment::{
    DefaultSessionSource, HostEnvironment, RDP_MIN_MAJOR_VERSION, StaticDefaults,
};
pub use manager::ConfigManager;
pub use settings::{DEFAULT_DELIMITER, Settings};
