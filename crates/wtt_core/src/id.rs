//! Item identifiers.
//!
//! Identifiers look like `WTT-000042`: a prefix, a hyphen, and the counter
//! value zero-padded to a fixed width. Values wider than the width are
//! printed in full.

use crate::item::Item;

/// Formats counter value `n` as an item identifier.
#[must_use]
pub fn format_item_id(prefix: &str, n: u64, width: usize) -> String {
    format!("{prefix}-{n:0width$}")
}

/// Extracts the numeric suffix of an identifier.
///
/// The suffix is whatever follows the last `-`. Identifiers without a
/// hyphen, or whose suffix is not a plain decimal number, yield 0.
#[must_use]
pub fn id_suffix(id: &str) -> u64 {
    match id.rsplit_once('-') {
        Some((_, tail)) if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) => {
            tail.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

/// Returns the largest identifier suffix in `items`, or 0.
#[must_use]
pub fn max_id_suffix(items: &[Item]) -> u64 {
    items.iter().map(|item| id_suffix(&item.id)).max().unwrap_or(0)
}
