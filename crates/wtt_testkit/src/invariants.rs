//! Catalog invariant checks.

use std::collections::HashSet;
use wtt_core::{id_suffix, Item};

/// Returns every id that appears more than once in `items`.
#[must_use]
pub fn duplicate_ids(items: &[Item]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            duplicates.push(item.id.clone());
        }
    }
    duplicates
}

/// Returns true if each id's numeric suffix is larger than the one before.
#[must_use]
pub fn strictly_increasing(ids: &[String]) -> bool {
    ids.windows(2).all(|pair| id_suffix(&pair[0]) < id_suffix(&pair[1]))
}
