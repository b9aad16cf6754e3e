//! Slot backend trait definition.

use crate::error::StorageResult;
use std::fmt;

/// One of the two persisted slots of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// The serialized item collection.
    Items,
    /// The identifier counter, stored as decimal text.
    Counter,
}

impl Slot {
    /// All slots, in a stable order.
    pub const ALL: [Slot; 2] = [Slot::Items, Slot::Counter];

    /// Returns the stable key (and file name) of this slot.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Slot::Items => "items.json",
            Slot::Counter => "counter",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A key-value backend with a fixed set of [`Slot`]s.
///
/// Backends are **opaque byte stores**. The catalog layer above decides what
/// the bytes mean.
///
/// # Invariants
///
/// - `read` returns exactly the bytes last written to that slot, or `None`
///   if the slot was never written
/// - a successful `write` is durable when it returns
/// - a failed `write` leaves the previous contents of the slot intact
/// - backends are `Send + Sync` and lock internally
pub trait SlotBackend: fmt::Debug + Send + Sync {
    /// Reads the current contents of `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self, slot: Slot) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the contents of `slot` with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be persisted.
    fn write(&self, slot: Slot, data: &[u8]) -> StorageResult<()>;

    /// Replaces several slots together.
    ///
    /// Either every entry is persisted or, on error, every slot keeps its
    /// previous contents. The default implementation writes the entries one
    /// by one and only suits backends whose writes cannot fail halfway.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry cannot be persisted.
    fn write_batch(&self, entries: &[(Slot, &[u8])]) -> StorageResult<()> {
        for (slot, data) in entries {
            self.write(*slot, data)?;
        }
        Ok(())
    }
}
