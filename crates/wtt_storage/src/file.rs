//! File-based slot backend for persistent catalogs.
//!
//! A catalog lives in a data directory:
//!
//! ```text
//! <data_dir>/
//! ├─ LOCK          # Advisory lock for single-writer
//! ├─ items.json    # Item collection slot
//! ├─ counter       # Identifier counter slot
//! └─ *.tmp, *.bak  # Present only while a write is in flight
//! ```

use crate::backend::{Slot, SlotBackend};
use crate::error::{StorageError, StorageResult};
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const LOCK_FILE: &str = "LOCK";
const TEMP_SUFFIX: &str = "tmp";
const BACKUP_SUFFIX: &str = "bak";

/// A directory-backed slot backend.
///
/// Each slot is one file. Writes go to a temporary file that is synced and
/// then renamed over the slot file, so a crash mid-write leaves either the
/// old or the new contents, never a torn file.
///
/// A batch stages every temp file first. While committing, each previous
/// slot file is kept as `<slot>.bak`; if any rename fails, the slots already
/// committed are restored from their backups and the batch fails as a whole.
///
/// # Thread Safety
///
/// The backend holds an exclusive advisory lock on the directory for its
/// whole lifetime, so only one `FileBackend` can exist per directory.
/// Writes within the process are serialized by an internal mutex.
///
/// # Example
///
/// ```no_run
/// use wtt_storage::{FileBackend, Slot, SlotBackend};
/// use std::path::Path;
///
/// let backend = FileBackend::open(Path::new("wtt-data")).unwrap();
/// backend.write(Slot::Counter, &b"3"[..]).unwrap();
/// ```
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    write_lock: Mutex<()>,
    _lock_file: File,
}

impl FileBackend {
    /// Opens or creates a data directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` exists but is not a directory
    /// - Another process holds the lock (returns `Locked`)
    /// - I/O errors occur
    pub fn open(path: &Path) -> StorageResult<Self> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        if !path.is_dir() {
            return Err(StorageError::InvalidPath(format!(
                "not a directory: {}",
                path.display()
            )));
        }

        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path.join(LOCK_FILE))?;

        if lock_file.try_lock_exclusive().is_err() {
            return Err(StorageError::Locked {
                path: path.display().to_string(),
            });
        }

        let backend = Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
            _lock_file: lock_file,
        };
        backend.recover()?;

        debug!(path = %path.display(), "opened data directory");
        Ok(backend)
    }

    /// Returns the data directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file that holds `slot`.
    #[must_use]
    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.path.join(slot.key())
    }

    fn temp_path(&self, slot: Slot) -> PathBuf {
        self.path.join(format!("{}.{TEMP_SUFFIX}", slot.key()))
    }

    /// Writes `data` to the temp file of `slot` and syncs it.
    fn stage(&self, slot: Slot, data: &[u8]) -> StorageResult<PathBuf> {
        let temp_path = self.temp_path(slot);
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        Ok(temp_path)
    }

    fn backup_path(&self, slot: Slot) -> PathBuf {
        self.path.join(format!("{}.{BACKUP_SUFFIX}", slot.key()))
    }

    /// Moves the current file of `slot` aside and renames the staged file
    /// into place. Returns whether a previous file was moved aside.
    fn commit(&self, slot: Slot, temp_path: &Path) -> StorageResult<bool> {
        let had_previous = match fs::rename(self.slot_path(slot), self.backup_path(slot)) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = fs::rename(temp_path, self.slot_path(slot)) {
            self.roll_back(slot, had_previous);
            return Err(e.into());
        }
        Ok(had_previous)
    }

    /// Puts the previous file of `slot` back, or removes the slot if it had
    /// none.
    fn roll_back(&self, slot: Slot, had_previous: bool) {
        let result = if had_previous {
            fs::rename(self.backup_path(slot), self.slot_path(slot))
        } else {
            match fs::remove_file(self.slot_path(slot)) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                other => other,
            }
        };
        if let Err(e) = result {
            warn!(%slot, error = %e, "failed to roll back slot");
        }
    }

    fn remove_backup(&self, slot: Slot) {
        let backup = self.backup_path(slot);
        let result = if backup.is_dir() {
            fs::remove_dir_all(&backup)
        } else {
            fs::remove_file(&backup)
        };
        if let Err(e) = result {
            debug!(%slot, error = %e, "previous slot file not removed");
        }
    }

    /// Settles backups left by an interrupted write: a slot with no file
    /// gets its backup back, any other backup is dropped.
    fn recover(&self) -> StorageResult<()> {
        for slot in Slot::ALL {
            if !self.backup_path(slot).exists() {
                continue;
            }
            if self.slot_path(slot).exists() {
                self.remove_backup(slot);
            } else {
                warn!(%slot, "restoring slot from backup");
                fs::rename(self.backup_path(slot), self.slot_path(slot))?;
            }
        }
        Ok(())
    }

    fn discard(&self, staged: &[(Slot, PathBuf)]) {
        for (_, temp_path) in staged {
            let _ = fs::remove_file(temp_path);
        }
    }

    #[cfg(unix)]
    fn sync_directory(&self) -> StorageResult<()> {
        File::open(&self.path)?.sync_all()?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn sync_directory(&self) -> StorageResult<()> {
        // NTFS journals metadata; no directory handle to sync
        Ok(())
    }
}

impl SlotBackend for FileBackend {
    fn read(&self, slot: Slot) -> StorageResult<Option<Vec<u8>>> {
        match fs::read(self.slot_path(slot)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, slot: Slot, data: &[u8]) -> StorageResult<()> {
        self.write_batch(&[(slot, data)])
    }

    fn write_batch(&self, entries: &[(Slot, &[u8])]) -> StorageResult<()> {
        let _guard = self.write_lock.lock();

        let mut staged = Vec::with_capacity(entries.len());
        for (slot, data) in entries {
            match self.stage(*slot, data) {
                Ok(temp_path) => staged.push((*slot, temp_path)),
                Err(e) => {
                    self.discard(&staged);
                    return Err(e);
                }
            }
        }

        let mut committed = Vec::with_capacity(staged.len());
        for (slot, temp_path) in &staged {
            match self.commit(*slot, temp_path) {
                Ok(had_previous) => committed.push((*slot, had_previous)),
                Err(e) => {
                    for (slot, had_previous) in committed.iter().rev() {
                        self.roll_back(*slot, *had_previous);
                    }
                    self.discard(&staged);
                    return Err(e);
                }
            }
        }

        for (slot, had_previous) in committed {
            if had_previous {
                self.remove_backup(slot);
            }
        }

        self.sync_directory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_open_creates_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog");

        let backend = FileBackend::open(&path).unwrap();
        assert!(path.is_dir());
        assert_eq!(backend.path(), path);
        assert!(backend.read(Slot::Items).unwrap().is_none());
    }

    #[test]
    fn file_write_and_read() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.write(Slot::Items, &b"[]"[..]).unwrap();
        backend.write(Slot::Counter, &b"42"[..]).unwrap();

        assert_eq!(backend.read(Slot::Items).unwrap().unwrap(), b"[]");
        assert_eq!(backend.read(Slot::Counter).unwrap().unwrap(), b"42");
        assert!(backend.slot_path(Slot::Items).exists());
    }

    #[test]
    fn file_persistence() {
        let dir = tempdir().unwrap();

        {
            let backend = FileBackend::open(dir.path()).unwrap();
            backend
                .write_batch(&[(Slot::Items, &b"[{\"id\":\"x\"}]"[..]), (Slot::Counter, &b"1"[..])])
                .unwrap();
        }

        {
            let backend = FileBackend::open(dir.path()).unwrap();
            assert_eq!(
                backend.read(Slot::Items).unwrap().unwrap(),
                b"[{\"id\":\"x\"}]"
            );
            assert_eq!(backend.read(Slot::Counter).unwrap().unwrap(), b"1");
        }
    }

    #[test]
    fn file_second_open_is_locked() {
        let dir = tempdir().unwrap();
        let _first = FileBackend::open(dir.path()).unwrap();

        let second = FileBackend::open(dir.path());
        assert!(matches!(second, Err(StorageError::Locked { .. })));
    }

    #[test]
    fn file_open_on_regular_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-a-dir");
        fs::write(&path, b"x").unwrap();

        let result = FileBackend::open(&path);
        assert!(matches!(result, Err(StorageError::InvalidPath(_))));
    }

    #[test]
    fn file_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        backend.write(Slot::Items, &b"[]"[..]).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    fn leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp") || name.ends_with(".bak"))
            .collect()
    }

    #[test]
    fn file_overwrite_leaves_no_backups() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        backend
            .write_batch(&[(Slot::Items, &b"[1]"[..]), (Slot::Counter, &b"1"[..])])
            .unwrap();
        backend
            .write_batch(&[(Slot::Items, &b"[2]"[..]), (Slot::Counter, &b"2"[..])])
            .unwrap();

        assert_eq!(backend.read(Slot::Items).unwrap().unwrap(), b"[2]");
        assert_eq!(backend.read(Slot::Counter).unwrap().unwrap(), b"2");
        assert!(leftovers(dir.path()).is_empty());
    }

    #[test]
    fn file_batch_staging_failure_keeps_both_slots() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        backend
            .write_batch(&[(Slot::Items, &b"[1]"[..]), (Slot::Counter, &b"1"[..])])
            .unwrap();

        // The counter temp file cannot be created over a directory
        fs::create_dir(dir.path().join("counter.tmp")).unwrap();

        let result =
            backend.write_batch(&[(Slot::Items, &b"[2]"[..]), (Slot::Counter, &b"2"[..])]);
        assert!(matches!(result, Err(StorageError::Io(_))));

        assert_eq!(backend.read(Slot::Items).unwrap().unwrap(), b"[1]");
        assert_eq!(backend.read(Slot::Counter).unwrap().unwrap(), b"1");
        assert!(!dir.path().join("items.json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn file_batch_commit_failure_rolls_back_committed_slots() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        backend
            .write_batch(&[(Slot::Items, &b"[1]"[..]), (Slot::Counter, &b"1"[..])])
            .unwrap();

        // The counter cannot be moved aside onto a non-empty directory, so
        // its commit fails after the items slot was already replaced
        let blocker = dir.path().join("counter.bak");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), b"x").unwrap();

        let result =
            backend.write_batch(&[(Slot::Items, &b"[2]"[..]), (Slot::Counter, &b"2"[..])]);
        assert!(matches!(result, Err(StorageError::Io(_))));

        assert_eq!(backend.read(Slot::Items).unwrap().unwrap(), b"[1]");
        assert_eq!(backend.read(Slot::Counter).unwrap().unwrap(), b"1");
        assert_eq!(leftovers(dir.path()), ["counter.bak"]);
    }

    #[test]
    fn file_open_restores_slot_from_backup() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("items.json.bak"), b"[7]").unwrap();
        fs::write(dir.path().join("counter"), b"7").unwrap();
        fs::write(dir.path().join("counter.bak"), b"6").unwrap();

        let backend = FileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.read(Slot::Items).unwrap().unwrap(), b"[7]");
        assert_eq!(backend.read(Slot::Counter).unwrap().unwrap(), b"7");
        assert!(leftovers(dir.path()).is_empty());
    }
}
