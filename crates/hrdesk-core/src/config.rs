use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wizard::HiddenFieldPolicy;

/// Username of the built-in HR account.
pub const DEFAULT_HR_USERNAME: &str = "HR@vmcc-india.com";

/// Password of the built-in HR account, used only when no hash is configured.
pub const DEFAULT_HR_PASSWORD: &str = "Hr@12345";

/// Root of `config.toml`. Every section is optional in the file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub hr: HrSettings,
    #[serde(default)]
    pub wizard: WizardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageSettings {
    /// Directory holding the JSON record blobs. Platform data dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HrSettings {
    #[serde(default = "default_hr_username")]
    pub username: String,
    /// Argon2 PHC string. The built-in password is hashed at startup when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl Default for HrSettings {
    fn default() -> Self {
        Self {
            username: default_hr_username(),
            password_hash: None,
        }
    }
}

fn default_hr_username() -> String {
    DEFAULT_HR_USERNAME.to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardSettings {
    #[serde(default)]
    pub hidden_fields: HiddenFieldPolicy,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. "info" or "hrdesk_infrastructure=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Also write a daily rolling log file under `<data_dir>/logs`.
    #[serde(default = "default_true")]
    pub file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
