//! CLI command implementations.

pub mod add;
pub mod checkout;
pub mod demo;
pub mod edit;
pub mod list;
pub mod show;

/// Result type shared by every command.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
