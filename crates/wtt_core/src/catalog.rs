//! Built-in catalogs: the category list, the starter items written into an
//! empty store, and the larger demo catalog.

use crate::id::format_item_id;
use crate::item::{Condition, Item};

/// Categories offered when adding or editing an item.
///
/// The repository accepts any category; this list is what front ends offer.
pub const CATEGORIES: [&str; 6] = [
    "Typewriters",
    "Cameras",
    "Set Pieces",
    "Furniture",
    "Costumes",
    "Props",
];

/// Category preselected for new items.
pub const DEFAULT_CATEGORY: &str = "Typewriters";

/// Condition preselected for new items.
pub const DEFAULT_CONDITION: Condition = Condition::Good;

/// Counter value left behind by [`seed_items`].
pub const SEED_COUNTER: u64 = 3;

const MINUTE: i64 = 60 * 1000;
const HOUR: i64 = 60 * MINUTE;

/// Starter items for an empty store, numbered 1 to [`SEED_COUNTER`].
#[must_use]
pub fn seed_items(prefix: &str, width: usize, now: i64) -> Vec<Item> {
    let rows = [
        (1, "Vintage Typewriter", "Typewriters", "Aisle 1", Condition::Good, false),
        (2, "Old Film Camera", "Cameras", "Aisle 2", Condition::Fair, true),
        (3, "Brass Candelabra", "Set Pieces", "Aisle 3", Condition::Good, false),
    ];
    rows.into_iter()
        .map(|(n, name, category, location, condition, checked_out)| {
            Item::new(format_item_id(prefix, n, width), name, category)
                .with_location(location)
                .with_condition(condition)
                .with_checked_out(checked_out)
                .with_updated_at(now)
        })
        .collect()
}

/// The demo catalog, numbered 101 to 118.
///
/// Timestamps are spread over the three days before `now`.
#[must_use]
pub fn demo_items(prefix: &str, width: usize, now: i64) -> Vec<Item> {
    use Condition::{Excellent, Fair, Good, NeedsRepair};

    let rows = [
        ("Royal Quiet De Luxe", "Typewriters", "Aisle 1 / Shelf A", Good, false, 2 * HOUR),
        ("Underwood No. 5", "Typewriters", "Aisle 1 / Shelf B", Fair, true, 24 * HOUR),
        ("Olympia SM9", "Typewriters", "Aisle 1 / Shelf C", Excellent, false, 15 * MINUTE),
        ("Canon AE-1", "Cameras", "Aisle 2 / Shelf A", Good, false, 6 * HOUR),
        ("Nikon FM2", "Cameras", "Aisle 2 / Shelf B", Good, true, 48 * HOUR),
        ("Polaroid SX-70", "Cameras", "Aisle 2 / Shelf C", Fair, false, 10 * HOUR),
        ("Victorian Writing Desk", "Furniture", "Bay 3", Good, false, 90 * MINUTE),
        ("Oak Rolltop Desk", "Furniture", "Bay 3", NeedsRepair, false, 72 * HOUR),
        ("Art Deco Sideboard", "Furniture", "Bay 4", Good, true, 30 * HOUR),
        ("Gaslight Street Lamp", "Set Pieces", "Back Lot", Good, false, 5 * HOUR),
        ("Library Book Wall", "Set Pieces", "Stage B", Excellent, false, 12 * HOUR),
        ("Paris Cafe Table", "Set Pieces", "Stage C", Good, true, 18 * HOUR),
        ("1940s Trench Coat", "Costumes", "Wardrobe 1", Good, false, 35 * MINUTE),
        ("Victorian Gown", "Costumes", "Wardrobe 2", Fair, true, 20 * HOUR),
        ("Pirate Captain Coat", "Costumes", "Wardrobe 3", Good, false, 8 * HOUR),
        ("Brass Telescope", "Props", "Props Cage A", Good, false, 3 * HOUR),
        ("Antique Compass", "Props", "Props Cage B", Excellent, false, 14 * HOUR),
        ("Leather Satchel", "Props", "Props Cage C", Good, true, 40 * HOUR),
    ];

    rows.into_iter()
        .zip(101..)
        .map(|((name, category, location, condition, checked_out, age), n)| {
            Item::new(format_item_id(prefix, n, width), name, category)
                .with_location(location)
                .with_condition(condition)
                .with_checked_out(checked_out)
                .with_updated_at(now - age)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::max_id_suffix;
    use std::collections::HashSet;

    #[test]
    fn seed_items_are_numbered_up_to_counter() {
        let items = seed_items("WTT", 6, 5);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "WTT-000001");
        assert_eq!(max_id_suffix(&items), SEED_COUNTER);
        assert!(items.iter().all(|item| item.updated_at == 5));
        assert!(items[1].checked_out);
    }

    #[test]
    fn demo_items_cover_every_category() {
        let items = demo_items("WTT", 6, 10 * 24 * HOUR);
        assert_eq!(items.len(), 18);
        assert_eq!(items[0].id, "WTT-000101");
        assert_eq!(items[17].id, "WTT-000118");

        let categories: HashSet<_> = items.iter().map(|item| item.category.as_str()).collect();
        for category in CATEGORIES {
            assert!(categories.contains(category), "missing {category}");
        }
    }

    #[test]
    fn demo_items_are_in_the_past() {
        let now = 10 * 24 * HOUR;
        let items = demo_items("WTT", 6, now);
        assert!(items.iter().all(|item| item.updated_at < now));
        assert_eq!(items.iter().filter(|item| item.checked_out).count(), 6);
    }
}
