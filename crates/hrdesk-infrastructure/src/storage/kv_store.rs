//! Directory-backed key-value store.
//!
//! Each key is one JSON blob named `<key>.json` inside the store directory:
//!
//! ```text
//! data_dir/
//! ├── employees.json      # array of Employee
//! ├── hrProfile.json      # HrProfile object
//! └── currentUser.json    # User object
//! ```

use serde::{Serialize, de::DeserializeOwned};
use std::path::PathBuf;

use super::atomic_json::AtomicJsonFile;

/// Key of the employee collection.
pub const EMPLOYEES_KEY: &str = "employees";
/// Key of the HR profile slot.
pub const HR_PROFILE_KEY: &str = "hrProfile";
/// Key of the current session slot.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// A flat namespace of JSON blobs under one directory.
#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Typed handle for the blob stored under `key`.
    pub fn file<T>(&self, key: &str) -> AtomicJsonFile<T>
    where
        T: Serialize + DeserializeOwned,
    {
        AtomicJsonFile::new(self.dir.join(format!("{}.json", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_keys_map_to_json_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = KvStore::new(temp_dir.path());

        let file = store.file::<Vec<String>>(EMPLOYEES_KEY);
        assert_eq!(file.path(), temp_dir.path().join("employees.json"));
        assert!(!file.path().exists());

        file.save(&vec!["a".to_string()]).unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn test_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let store = KvStore::new(temp_dir.path());

        store.file::<String>(HR_PROFILE_KEY).save(&"hr".to_string()).unwrap();
        store.file::<String>(CURRENT_USER_KEY).remove().unwrap();

        assert_eq!(
            store.file::<String>(HR_PROFILE_KEY).load().unwrap().as_deref(),
            Some("hr")
        );
    }
}
