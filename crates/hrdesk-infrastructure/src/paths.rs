//! Unified path management for hrdesk files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/hrdesk/            # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/hrdesk/       # Data directory (record store)
//! ├── employees.json
//! ├── hrProfile.json
//! ├── currentUser.json
//! └── logs/
//!     └── hrdesk.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "hrdesk";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for hrdesk_core::HrError {
    fn from(e: PathError) -> Self {
        hrdesk_core::HrError::config(e.to_string())
    }
}

/// Resolves where hrdesk keeps its files.
///
/// A base directory, when given, replaces both the platform config and data
/// directories (tests and `--data-dir` use this).
#[derive(Debug, Clone, Default)]
pub struct HrdeskPaths {
    base: Option<PathBuf>,
}

impl HrdeskPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Config directory, e.g. `~/.config/hrdesk/`.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Data directory, e.g. `~/.local/share/hrdesk/`.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Log directory under a resolved data directory.
    pub fn logs_dir(data_dir: &Path) -> PathBuf {
        data_dir.join("logs")
    }
}
