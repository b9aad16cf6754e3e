//! Error types for WTT core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in repository operations.
///
/// Only writes fail. Missing or corrupt data on read degrades to an empty
/// collection or a zero counter, and lookups of unknown identifiers are
/// reported as `None`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] wtt_storage::StorageError),

    /// Records could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The identifier counter cannot be advanced any further.
    #[error("identifier counter exhausted at {value}")]
    CounterExhausted {
        /// The counter value that could not be incremented.
        value: u64,
    },
}

impl CoreError {
    /// Creates a counter exhausted error.
    pub fn counter_exhausted(value: u64) -> Self {
        Self::CounterExhausted { value }
    }
}
