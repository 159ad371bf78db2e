//! Advisory file locks and atomic replacement.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use fs2::FileExt;

/// A file lock guard that releases the lock when dropped.
///
/// The lock file itself is never removed so every writer locks the same inode.
pub(crate) struct FileLock {
    file: File,
}

impl FileLock {
    /// Blocks until an exclusive lock on `<path>.lock` is held.
    pub(crate) fn acquire(path: &Path) -> std::io::Result<Self> {
        let lock_path = lock_path_for(path);

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        tracing::trace!("Acquired lock {:?}", lock_path);

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// `employees.json` -> `employees.json.lock`
fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

/// `employees.json` -> `.employees.json.tmp`
fn temp_path_for(path: &Path) -> std::io::Result<PathBuf> {
    let parent = path.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path has no parent directory",
        )
    })?;
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "Path has no file name")
    })?;

    Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
}

/// Replaces `path` with `contents`: temp file in the same directory, fsync,
/// then rename over the target.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path_for(path)?;
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(contents)?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lock_and_temp_names() {
        let path = Path::new("/data/hrdesk/employees.json");
        assert_eq!(
            lock_path_for(path),
            PathBuf::from("/data/hrdesk/employees.json.lock")
        );
        assert_eq!(
            temp_path_for(path).unwrap(),
            PathBuf::from("/data/hrdesk/.employees.json.tmp")
        );
    }

    #[test]
    fn test_write_atomically_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("blob.json");

        write_atomically(&path, b"[]").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(!temp_dir.path().join("nested").join(".blob.json.tmp").exists());
    }

    #[test]
    fn test_lock_is_reacquirable_after_drop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.json");

        let first = FileLock::acquire(&path).unwrap();
        drop(first);
        let _second = FileLock::acquire(&path).unwrap();
    }
}
