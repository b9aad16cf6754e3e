//! Errors raised by the command-line front end itself.

use thiserror::Error;

/// Input the front end refuses before it reaches the repository.
#[derive(Debug, Error)]
pub enum CliError {
    /// The item name is empty after trimming.
    #[error("Item name is required.")]
    NameRequired,

    /// A scanned code was blank.
    #[error("scanned code is empty")]
    EmptyCode,

    /// No item has the given id.
    #[error("Item not found: {0}")]
    ItemNotFound(String),
}
