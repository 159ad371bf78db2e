//! Wires repositories and use cases together for one data directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hrdesk_core::Result;
use hrdesk_core::clock::{Clock, SystemClock};
use hrdesk_core::config::RootConfig;
use hrdesk_core::credential::CredentialHasher;
use hrdesk_infrastructure::storage::KvStore;
use hrdesk_infrastructure::{
    Argon2CredentialHasher, HrdeskPaths, JsonEmployeeRepository, JsonHrProfileRepository,
    JsonSessionRepository,
};

use crate::{AuthGate, EmployeeDirectory, IntakeService, SettingsService};

/// Everything a front end needs, built from one `RootConfig`.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub auth: AuthGate,
    pub directory: EmployeeDirectory,
    pub intake: IntakeService,
    pub settings: SettingsService,
}

impl AppContext {
    /// Builds the context with Argon2 hashing and the system clock.
    pub fn build(config: &RootConfig, data_dir: &Path) -> Result<Self> {
        Self::with_parts(
            config,
            data_dir,
            Arc::new(Argon2CredentialHasher::new()),
            Arc::new(SystemClock),
        )
    }

    pub fn with_parts(
        config: &RootConfig,
        data_dir: &Path,
        hasher: Arc<dyn CredentialHasher>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let store = KvStore::new(data_dir);
        let employees = Arc::new(JsonEmployeeRepository::new(&store));
        let sessions = Arc::new(JsonSessionRepository::new(&store));
        let profiles = Arc::new(JsonHrProfileRepository::new(&store));

        let auth = AuthGate::from_settings(&config.hr, employees.clone(), sessions, hasher.clone());
        let intake = IntakeService::new(
            employees.clone(),
            hasher,
            clock,
            config.wizard.hidden_fields,
        );

        tracing::debug!("[Bootstrap] Record store at {:?}", data_dir);

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            auth,
            directory: EmployeeDirectory::new(employees),
            intake,
            settings: SettingsService::new(profiles),
        })
    }
}

/// Picks the data directory: explicit override, then `[storage] data_dir`,
/// then the platform default.
pub fn resolve_data_dir(config: &RootConfig, override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.storage.data_dir {
        return Ok(dir.clone());
    }
    Ok(HrdeskPaths::new(None).data_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_beats_config() {
        let mut config = RootConfig::default();
        config.storage.data_dir = Some(PathBuf::from("/srv/hrdesk"));

        let dir = resolve_data_dir(&config, Some(Path::new("/tmp/other"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/other"));

        let dir = resolve_data_dir(&config, None).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/hrdesk"));
    }
}
