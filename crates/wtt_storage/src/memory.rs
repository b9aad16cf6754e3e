//! In-memory slot backend for testing.

use crate::backend::{Slot, SlotBackend};
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// An in-memory slot backend.
///
/// This backend keeps both slots in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Throwaway catalogs that don't need persistence
///
/// Writes can be made to fail on demand with [`InMemoryBackend::fail_writes`],
/// which is how tests simulate a full or unavailable device.
///
/// # Example
///
/// ```rust
/// use wtt_storage::{InMemoryBackend, Slot, SlotBackend};
///
/// let backend = InMemoryBackend::new();
/// assert!(backend.read(Slot::Items).unwrap().is_none());
/// backend.write(Slot::Items, &b"[]"[..]).unwrap();
/// assert_eq!(backend.read(Slot::Items).unwrap(), Some(b"[]".to_vec()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    slots: RwLock<HashMap<Slot, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with `slot` preloaded with `data`.
    ///
    /// Useful for testing how corrupt or foreign data is handled.
    #[must_use]
    pub fn with_slot(slot: Slot, data: Vec<u8>) -> Self {
        let backend = Self::new();
        backend.slots.write().insert(slot, data);
        backend
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns a copy of the raw contents of `slot`.
    #[must_use]
    pub fn raw(&self, slot: Slot) -> Option<Vec<u8>> {
        self.slots.read().get(&slot).cloned()
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("in-memory backend rejected write"));
        }
        Ok(())
    }
}

impl SlotBackend for InMemoryBackend {
    fn read(&self, slot: Slot) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.slots.read().get(&slot).cloned())
    }

    fn write(&self, slot: Slot, data: &[u8]) -> StorageResult<()> {
        self.check_writable()?;
        self.slots.write().insert(slot, data.to_vec());
        Ok(())
    }

    fn write_batch(&self, entries: &[(Slot, &[u8])]) -> StorageResult<()> {
        self.check_writable()?;
        let mut slots = self.slots.write();
        for (slot, data) in entries {
            slots.insert(*slot, data.to_vec());
        }
        Ok(())
    }
}
