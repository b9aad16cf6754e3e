//! Demo catalog, reset and seed commands.

use super::CommandResult;
use std::io::Write;
use wtt_core::{catalog, ItemRepository};

/// Replaces the catalog with the demo items.
pub fn load(repo: &ItemRepository, out: &mut impl Write) -> CommandResult {
    let config = repo.config();
    let items = catalog::demo_items(&config.id_prefix, config.id_width, repo.now());
    let count = items.len();
    repo.replace_all(items)?;
    writeln!(out, "Loaded {count} demo items.")?;
    Ok(())
}

/// Removes every item and resets numbering.
pub fn reset(repo: &ItemRepository, out: &mut impl Write) -> CommandResult {
    repo.clear_all()?;
    writeln!(out, "Catalog cleared.")?;
    Ok(())
}

/// Writes the starter items into an empty catalog.
pub fn seed(repo: &ItemRepository, out: &mut impl Write) -> CommandResult {
    if repo.seed_if_empty()? {
        writeln!(out, "Added {} starter items.", repo.list_all().len())?;
    } else {
        writeln!(out, "Catalog is not empty; nothing seeded.")?;
    }
    Ok(())
}
