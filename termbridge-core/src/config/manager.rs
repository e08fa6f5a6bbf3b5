//! Loading and saving the settings file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::settings::Settings;

/// Name of the settings file inside the configuration directory.
const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves [`Settings`] as TOML in a configuration directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager rooted at an explicit configuration directory.
    #[must_use]
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a manager rooted at the user's configuration directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] when the platform exposes no
    /// configuration directory.
    pub fn new() -> Result<Self, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_dir(base.join("termbridge")))
    }

    /// Returns the directory this manager reads and writes.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads settings, falling back to defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let path = self.config_dir.join(SETTINGS_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves settings, creating the configuration directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        let path = self.config_dir.join(SETTINGS_FILE);
        let content = toml::to_string_pretty(settings)?;
        fs::write(&path, content)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}
