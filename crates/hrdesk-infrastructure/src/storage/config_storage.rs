//! Config file storage.
//!
//! Loads and saves `config.toml` as a typed `RootConfig`.

use std::fs;
use std::path::{Path, PathBuf};

use hrdesk_core::HrError;
use hrdesk_core::config::RootConfig;

use super::lock::{FileLock, write_atomically};

/// Errors that can occur during config storage operations.
#[derive(Debug)]
pub enum ConfigStorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// TOML parsing error.
    TomlParseError(toml::de::Error),
    /// TOML serialization error.
    TomlSerError(toml::ser::Error),
}

impl std::fmt::Display for ConfigStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigStorageError::TomlParseError(e) => write!(f, "TOML parse error: {}", e),
            ConfigStorageError::TomlSerError(e) => write!(f, "TOML serialization error: {}", e),
        }
    }
}

impl std::error::Error for ConfigStorageError {}

impl From<std::io::Error> for ConfigStorageError {
    fn from(e: std::io::Error) -> Self {
        ConfigStorageError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigStorageError {
    fn from(e: toml::de::Error) -> Self {
        ConfigStorageError::TomlParseError(e)
    }
}

impl From<toml::ser::Error> for ConfigStorageError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigStorageError::TomlSerError(e)
    }
}

impl From<ConfigStorageError> for HrError {
    fn from(e: ConfigStorageError) -> Self {
        match e {
            ConfigStorageError::IoError(e) => e.into(),
            ConfigStorageError::TomlParseError(e) => {
                HrError::config(format!("invalid config.toml: {}", e))
            }
            ConfigStorageError::TomlSerError(e) => e.into(),
        }
    }
}

/// Storage for `config.toml`.
///
/// Responsibilities:
/// - Parse TOML into `RootConfig`, falling back to defaults when absent
/// - Write it back atomically under an exclusive lock
///
/// Does NOT:
/// - Resolve default locations (see `HrdeskPaths`)
/// - Apply command-line overrides
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the config. Missing or blank files yield `RootConfig::default()`.
    pub fn load(&self) -> Result<RootConfig, ConfigStorageError> {
        if !self.path.exists() {
            tracing::debug!("No config at {:?}, using defaults", self.path);
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        Ok(toml::from_str(&content)?)
    }

    /// Saves the config atomically.
    pub fn save(&self, config: &RootConfig) -> Result<(), ConfigStorageError> {
        let toml_string = toml::to_string_pretty(config)?;
        let _lock = FileLock::acquire(&self.path)?;
        write_atomically(&self.path, toml_string.as_bytes())?;
        Ok(())
    }
}
