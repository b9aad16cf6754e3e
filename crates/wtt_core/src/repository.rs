//! The item repository.

use crate::catalog;
use crate::clock::{Clock, SystemClock};
use crate::config::RepositoryConfig;
use crate::error::{CoreError, CoreResult};
use crate::id::{format_item_id, max_id_suffix};
use crate::item::Item;
use crate::store::RecordStore;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use wtt_storage::{FileBackend, InMemoryBackend, SlotBackend};

/// Catalog of inventory items.
///
/// All writes go through the repository, which stamps `updated_at` from its
/// [`Clock`] and owns the identifier counter.
///
/// # Invariants
///
/// - No two items share an `id`
/// - `next_id` never repeats a value unless the store was cleared or replaced
/// - `replace_all` sets the counter to the largest identifier suffix it was given
/// - `clear_all` leaves an empty collection and a zero counter
///
/// # Thread Safety
///
/// Every read-modify-write runs under one repository-wide lock, so the
/// repository can be shared across threads.
#[derive(Debug)]
pub struct ItemRepository {
    store: RecordStore,
    clock: Arc<dyn Clock>,
    config: RepositoryConfig,
    write_lock: Mutex<()>,
}

impl ItemRepository {
    /// Creates a repository over `backend`.
    ///
    /// Seeds the store when `config.seed_if_empty` is set.
    ///
    /// # Errors
    ///
    /// Returns an error only if seeding was requested and failed.
    pub fn with_backend(
        backend: Box<dyn SlotBackend>,
        clock: Arc<dyn Clock>,
        config: RepositoryConfig,
    ) -> CoreResult<Self> {
        let repo = Self {
            store: RecordStore::new(backend),
            clock,
            config,
            write_lock: Mutex::new(()),
        };
        if repo.config.seed_if_empty {
            repo.seed_if_empty()?;
        }
        Ok(repo)
    }

    /// Opens a repository stored in the data directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened or locked, or if
    /// seeding fails.
    pub fn open(path: &Path, config: RepositoryConfig) -> CoreResult<Self> {
        let backend = FileBackend::open(path)?;
        Self::with_backend(Box::new(backend), Arc::new(SystemClock), config)
    }

    /// Creates an empty in-memory repository with default settings.
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self {
            store: RecordStore::new(Box::new(InMemoryBackend::new())),
            clock: Arc::new(SystemClock),
            config: RepositoryConfig::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Returns the current time according to the repository clock.
    #[must_use]
    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Returns every item, most recently created first.
    #[must_use]
    pub fn list_all(&self) -> Vec<Item> {
        self.store.read_collection()
    }

    /// Finds the item whose id is exactly `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<Item> {
        self.list_all().into_iter().find(|item| item.id == id)
    }

    /// Allocates the next identifier.
    ///
    /// The counter is persisted before the identifier is returned, so an
    /// identifier that is never used leaves a gap rather than being handed
    /// out again.
    ///
    /// # Errors
    ///
    /// Returns an error if the counter cannot be persisted or has reached
    /// `u64::MAX`.
    pub fn next_id(&self) -> CoreResult<String> {
        let _guard = self.write_lock.lock();

        let current = self.store.read_counter();
        let next = current
            .checked_add(1)
            .ok_or_else(|| CoreError::counter_exhausted(current))?;
        self.store.write_counter(next)?;

        let id = format_item_id(&self.config.id_prefix, next, self.config.id_width);
        debug!(%id, "allocated identifier");
        Ok(id)
    }

    /// Inserts `item`, or replaces the item with the same id.
    ///
    /// A replaced item keeps its position; a new item goes to the front.
    /// `updated_at` is set to the current time either way. Returns the
    /// stored item.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn upsert(&self, mut item: Item) -> CoreResult<Item> {
        let _guard = self.write_lock.lock();

        let mut items = self.store.read_collection();
        item.updated_at = self.clock.now_millis();

        match items.iter().position(|existing| existing.id == item.id) {
            Some(idx) => {
                debug!(id = %item.id, "updating item");
                items[idx] = item.clone();
            }
            None => {
                debug!(id = %item.id, "inserting item");
                items.insert(0, item.clone());
            }
        }

        self.store.write_collection(&items)?;
        Ok(item)
    }

    /// Sets the checked-out flag of item `id`.
    ///
    /// Returns the updated item, or `None` without writing anything if no
    /// item has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be persisted.
    pub fn set_checked_out(&self, id: &str, checked_out: bool) -> CoreResult<Option<Item>> {
        let _guard = self.write_lock.lock();

        let mut items = self.store.read_collection();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            debug!(%id, "checkout toggle for unknown item ignored");
            return Ok(None);
        };

        item.checked_out = checked_out;
        item.updated_at = self.clock.now_millis();
        let updated = item.clone();

        self.store.write_collection(&items)?;
        debug!(%id, checked_out, "checkout state changed");
        Ok(Some(updated))
    }

    /// Replaces the whole collection with `items`, stored as given.
    ///
    /// The counter becomes the largest numeric suffix among the new ids, so
    /// the next identifier follows the highest one present.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection or counter cannot be persisted.
    pub fn replace_all(&self, items: Vec<Item>) -> CoreResult<()> {
        let _guard = self.write_lock.lock();

        let counter = max_id_suffix(&items);
        self.store.write_collection_and_counter(&items, counter)?;
        info!(count = items.len(), counter, "replaced catalog");
        Ok(())
    }

    /// Removes every item and resets the counter to 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be persisted.
    pub fn clear_all(&self) -> CoreResult<()> {
        let _guard = self.write_lock.lock();

        self.store.write_collection_and_counter(&[], 0)?;
        info!("cleared catalog");
        Ok(())
    }

    /// Writes the starter catalog if the store holds no items.
    ///
    /// Returns whether anything was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be persisted.
    pub fn seed_if_empty(&self) -> CoreResult<bool> {
        let _guard = self.write_lock.lock();

        if !self.store.read_collection().is_empty() {
            return Ok(false);
        }

        let items = catalog::seed_items(
            &self.config.id_prefix,
            self.config.id_width,
            self.clock.now_millis(),
        );
        self.store
            .write_collection_and_counter(&items, catalog::SEED_COUNTER)?;
        info!(count = items.len(), "seeded empty catalog");
        Ok(true)
    }
}
