//! Storage layer: atomic JSON blobs, the key-value store built on them, and
//! the config file.

mod atomic_json;
mod config_storage;
mod kv_store;
mod lock;

pub use atomic_json::{AtomicFileError, AtomicJsonFile};
pub use config_storage::{ConfigStorage, ConfigStorageError};
pub use kv_store::{CURRENT_USER_KEY, EMPLOYEES_KEY, HR_PROFILE_KEY, KvStore};

use hrdesk_core::{HrError, Result};

/// Runs synchronous file work on tokio's blocking pool.
pub(crate) async fn run_blocking<F, T>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| HrError::internal(format!("storage task failed: {}", e)))?
}
