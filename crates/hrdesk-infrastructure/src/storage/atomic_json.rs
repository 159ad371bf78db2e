//! Atomic JSON file operations with ACID guarantees.
//!
//! Provides a thin layer for safe concurrent access to a single JSON blob.

use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use hrdesk_core::HrError;

use super::lock::{FileLock, write_atomically};

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::JsonError(e) => write!(f, "JSON error: {}", e),
            AtomicFileError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::IoError(e)
    }
}

impl From<serde_json::Error> for AtomicFileError {
    fn from(e: serde_json::Error) -> Self {
        AtomicFileError::JsonError(e)
    }
}

impl From<AtomicFileError> for HrError {
    fn from(e: AtomicFileError) -> Self {
        match e {
            AtomicFileError::IoError(e) => e.into(),
            AtomicFileError::JsonError(e) => e.into(),
            AtomicFileError::LockError(message) => HrError::data_access(message),
        }
    }
}

/// A handle to an atomic JSON file with ACID guarantees.
///
/// Provides:
/// - **Atomicity**: Writes are all-or-nothing via tmp file + atomic rename
/// - **Consistency**: JSON schema validation on load/save
/// - **Isolation**: An exclusive lock is held across read-modify-write
/// - **Durability**: Explicit fsync before rename
#[derive(Debug, Clone)]
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic JSON file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Replaces the file contents under the exclusive lock.
    pub fn save(&self, data: &T) -> Result<(), AtomicFileError> {
        let _lock = self.acquire_lock()?;
        self.write(data)
    }

    /// Performs a transactional update with file locking.
    ///
    /// The update function receives a mutable reference to the current data
    /// (or `default_value` when the file is absent). If it returns `Ok`, the
    /// data is written back before the lock is released; on `Err` the file is
    /// left untouched.
    pub fn update<F, R>(&self, default_value: T, f: F) -> Result<R, AtomicFileError>
    where
        F: FnOnce(&mut T) -> Result<R, AtomicFileError>,
    {
        let _lock = self.acquire_lock()?;

        let mut data = self.load()?.unwrap_or(default_value);

        let outcome = f(&mut data)?;

        self.write(&data)?;

        Ok(outcome)
    }

    /// Deletes the file under the lock. Absent files are fine.
    pub fn remove(&self) -> Result<(), AtomicFileError> {
        let _lock = self.acquire_lock()?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, data: &T) -> Result<(), AtomicFileError> {
        let json = serde_json::to_string_pretty(data)?;
        write_atomically(&self.path, json.as_bytes())?;
        Ok(())
    }

    fn acquire_lock(&self) -> Result<FileLock, AtomicFileError> {
        FileLock::acquire(&self.path)
            .map_err(|e| AtomicFileError::LockError(format!("Failed to acquire lock: {}", e)))
    }
}
