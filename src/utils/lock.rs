//! Advisory single-instance lock file.
//!
//! Two concurrent runs would race on the same destination tree, so the
//! process takes an exclusive lock file at startup and removes it when
//! the guard is dropped. The lock is advisory: it only guards against
//! other instances of this program, which is all the destination
//! directory contract requires.

use crate::utils::errors::{BackupError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Guard holding the lock file for the lifetime of a run.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    /// Acquire the lock, writing our PID into the lock file.
    ///
    /// Fails with [`BackupError::Locked`] when the file already exists,
    /// meaning another instance owns the destination tree.
    pub fn acquire(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(BackupError::Locked(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(file, "{}", std::process::id())?;
        debug!("acquired lock file {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!("failed to remove lock file {}: {}", self.path.display(), e);
        } else {
            debug!("released lock file {}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_acquire_and_release() {
        let temp_dir = TempDir::new().unwrap();
        let lock_path = temp_dir.path().join("backup.lock");

        {
            let _lock = RunLock::acquire(&lock_path).unwrap();
            assert!(lock_path.exists());
        }

        // Dropped — lock file is gone, a new acquire succeeds
        assert!(!lock_path.exists());
        let _lock = RunLock::acquire(&lock_path).unwrap();
    }

    #[test]
    fn test_second_instance_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let lock_path = temp_dir.path().join("backup.lock");

        let _held = RunLock::acquire(&lock_path).unwrap();
        match RunLock::acquire(&lock_path) {
            Err(BackupError::Locked(p)) => assert_eq!(p, lock_path),
            other => panic!("expected Locked error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_lock_file_contains_pid() {
        let temp_dir = TempDir::new().unwrap();
        let lock_path = temp_dir.path().join("backup.lock");

        let _lock = RunLock::acquire(&lock_path).unwrap();
        let content = std::fs::read_to_string(&lock_path).unwrap();
        assert_eq!(content.trim(), std::process::id().to_string());
    }
}
