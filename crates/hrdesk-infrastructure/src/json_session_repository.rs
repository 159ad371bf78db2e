//! KvStore-based SessionRepository implementation.

use async_trait::async_trait;
use hrdesk_core::error::Result;
use hrdesk_core::session::{SessionRepository, User};
use std::path::Path;

use crate::storage::{AtomicJsonFile, CURRENT_USER_KEY, KvStore, run_blocking};

/// Current session persisted as a JSON object under `currentUser`.
#[derive(Debug, Clone)]
pub struct JsonSessionRepository {
    file: AtomicJsonFile<User>,
}

impl JsonSessionRepository {
    pub fn new(store: &KvStore) -> Self {
        Self {
            file: store.file(CURRENT_USER_KEY),
        }
    }

    pub fn with_dir(dir: &Path) -> Self {
        Self::new(&KvStore::new(dir))
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn load(&self) -> Result<Option<User>> {
        let file = self.file.clone();
        run_blocking(move || Ok(file.load()?)).await
    }

    async fn save(&self, user: &User) -> Result<()> {
        let file = self.file.clone();
        let user = user.clone();
        run_blocking(move || Ok(file.save(&user)?)).await
    }

    async fn clear(&self) -> Result<()> {
        let file = self.file.clone();
        run_blocking(move || Ok(file.remove()?)).await
    }
}
