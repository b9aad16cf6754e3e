//! Test fixtures and repository helpers.

use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use wtt_core::{catalog, ItemRepository, ManualClock, RepositoryConfig};
use wtt_storage::{FileBackend, InMemoryBackend};

/// Clock reading every fixture starts at (2024-01-01T00:00:00Z).
pub const FIXTURE_EPOCH: i64 = 1_704_067_200_000;

/// A test repository with a manual clock and automatic cleanup.
pub struct TestRepository {
    /// The repository instance.
    pub repo: ItemRepository,
    /// The clock driving `updated_at` stamps.
    pub clock: Arc<ManualClock>,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: Option<TempDir>,
}

impl TestRepository {
    /// Creates an empty in-memory test repository.
    pub fn memory() -> Self {
        Self::memory_with_config(RepositoryConfig::default())
    }

    /// Creates an empty in-memory test repository with `config`.
    pub fn memory_with_config(config: RepositoryConfig) -> Self {
        let clock = Arc::new(ManualClock::new(FIXTURE_EPOCH));
        let repo = ItemRepository::with_backend(
            Box::new(InMemoryBackend::new()),
            clock.clone(),
            config,
        )
        .expect("Failed to open in-memory repository");
        Self {
            repo,
            clock,
            _temp_dir: None,
        }
    }

    /// Creates an empty repository in a temporary data directory.
    pub fn file() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let clock = Arc::new(ManualClock::new(FIXTURE_EPOCH));
        let backend = FileBackend::open(temp_dir.path()).expect("Failed to open file backend");
        let repo = ItemRepository::with_backend(
            Box::new(backend),
            clock.clone(),
            RepositoryConfig::default(),
        )
        .expect("Failed to open file repository");
        Self {
            repo,
            clock,
            _temp_dir: Some(temp_dir),
        }
    }

    /// Returns the data directory if file-based, None if in-memory.
    pub fn path(&self) -> Option<&Path> {
        self._temp_dir.as_ref().map(TempDir::path)
    }
}

impl std::ops::Deref for TestRepository {
    type Target = ItemRepository;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}

/// Runs a test with a temporary in-memory repository.
pub fn with_temp_repo<F, R>(f: F) -> R
where
    F: FnOnce(&ItemRepository, &ManualClock) -> R,
{
    let test_repo = TestRepository::memory();
    f(&test_repo.repo, &test_repo.clock)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Creates a repository loaded with the demo catalog.
    pub fn demo_repository() -> TestRepository {
        let test_repo = TestRepository::memory();
        let items = catalog::demo_items("WTT", 6, FIXTURE_EPOCH);
        test_repo
            .replace_all(items)
            .expect("Failed to load demo catalog");
        test_repo
    }

    /// Creates a repository holding `count` items added the normal way.
    pub fn populated_repository(count: usize) -> TestRepository {
        let test_repo = TestRepository::memory();
        for i in 0..count {
            let id = test_repo.next_id().expect("Failed to allocate id");
            test_repo
                .upsert(wtt_core::Item::new(id, format!("Item {i}"), "Props"))
                .expect("Failed to insert item");
            test_repo.clock.advance(1);
        }
        test_repo
    }
}
