//! Typed record store over a slot backend.

use crate::error::CoreResult;
use crate::item::Item;
use tracing::warn;
use wtt_storage::{Slot, SlotBackend};

/// Reads and writes the item collection and the identifier counter.
///
/// The collection is a JSON array; the counter is decimal text. Reads never
/// fail: a missing, unreadable or unparsable slot is treated as empty.
/// Writes report every failure.
#[derive(Debug)]
pub struct RecordStore {
    backend: Box<dyn SlotBackend>,
}

impl RecordStore {
    /// Wraps a backend.
    #[must_use]
    pub fn new(backend: Box<dyn SlotBackend>) -> Self {
        Self { backend }
    }

    fn read_slot(&self, slot: Slot) -> Option<Vec<u8>> {
        match self.backend.read(slot) {
            Ok(data) => data,
            Err(e) => {
                warn!(%slot, error = %e, "slot unreadable, using default");
                None
            }
        }
    }

    /// Returns the persisted collection, or an empty one.
    #[must_use]
    pub fn read_collection(&self) -> Vec<Item> {
        let Some(data) = self.read_slot(Slot::Items) else {
            return Vec::new();
        };
        match serde_json::from_slice(&data) {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "item collection corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replaces the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be encoded or written.
    pub fn write_collection(&self, items: &[Item]) -> CoreResult<()> {
        let data = serde_json::to_vec(items)?;
        self.backend.write(Slot::Items, &data)?;
        Ok(())
    }

    /// Returns the persisted counter, or 0.
    #[must_use]
    pub fn read_counter(&self) -> u64 {
        let Some(data) = self.read_slot(Slot::Counter) else {
            return 0;
        };
        match std::str::from_utf8(&data).ok().and_then(|s| s.trim().parse().ok()) {
            Some(value) => value,
            None => {
                warn!("identifier counter corrupt, treating as 0");
                0
            }
        }
    }

    /// Replaces the persisted counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the counter cannot be written.
    pub fn write_counter(&self, value: u64) -> CoreResult<()> {
        self.backend.write(Slot::Counter, value.to_string().as_bytes())?;
        Ok(())
    }

    /// Replaces the collection and the counter in one backend batch.
    ///
    /// # Errors
    ///
    /// Returns an error if either slot cannot be encoded or written.
    pub fn write_collection_and_counter(&self, items: &[Item], counter: u64) -> CoreResult<()> {
        let data = serde_json::to_vec(items)?;
        let counter = counter.to_string();
        self.backend.write_batch(&[
            (Slot::Items, data.as_slice()),
            (Slot::Counter, counter.as_bytes()),
        ])?;
        Ok(())
    }
}
