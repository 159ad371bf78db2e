//! KvStore-based HrProfileRepository implementation.

use async_trait::async_trait;
use hrdesk_core::error::Result;
use hrdesk_core::hr_profile::{HrProfile, HrProfileRepository};
use std::path::Path;

use crate::storage::{AtomicJsonFile, HR_PROFILE_KEY, KvStore, run_blocking};

/// HR profile persisted as a single JSON object under `hrProfile`.
#[derive(Debug, Clone)]
pub struct JsonHrProfileRepository {
    file: AtomicJsonFile<HrProfile>,
}

impl JsonHrProfileRepository {
    pub fn new(store: &KvStore) -> Self {
        Self {
            file: store.file(HR_PROFILE_KEY),
        }
    }

    pub fn with_dir(dir: &Path) -> Self {
        Self::new(&KvStore::new(dir))
    }
}

#[async_trait]
impl HrProfileRepository for JsonHrProfileRepository {
    async fn get(&self) -> Result<Option<HrProfile>> {
        let file = self.file.clone();
        run_blocking(move || Ok(file.load()?)).await
    }

    async fn save(&self, profile: &HrProfile) -> Result<()> {
        let file = self.file.clone();
        let profile = profile.clone();
        run_blocking(move || {
            file.save(&profile)?;
            tracing::debug!("Saved HR profile");
            Ok(())
        })
        .await
    }
}
