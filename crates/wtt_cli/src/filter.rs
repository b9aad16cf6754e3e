//! Search and filters for the item list.

use clap::ValueEnum;
use wtt_core::Item;

/// Checked-out filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Availability {
    /// Every item
    #[default]
    All,
    /// Items not checked out
    Available,
    /// Items checked out
    CheckedOut,
}

/// Combined search text, category and availability filter.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    query: String,
    category: Option<String>,
    availability: Availability,
}

impl ItemFilter {
    /// Builds a filter. The query is trimmed and lowercased; an empty query
    /// matches everything.
    pub fn new(query: Option<&str>, category: Option<String>, availability: Availability) -> Self {
        Self {
            query: query.map(|q| q.trim().to_lowercase()).unwrap_or_default(),
            category,
            availability,
        }
    }

    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_none() && self.availability == Availability::All
    }

    /// Returns true if `item` passes every criterion.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_query(item) && self.matches_category(item) && self.matches_availability(item)
    }

    fn matches_query(&self, item: &Item) -> bool {
        self.query.is_empty()
            || [&item.id, &item.name, &item.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query))
    }

    fn matches_category(&self, item: &Item) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| item.category == category)
    }

    fn matches_availability(&self, item: &Item) -> bool {
        match self.availability {
            Availability::All => true,
            Availability::Available => !item.checked_out,
            Availability::CheckedOut => item.checked_out,
        }
    }

    /// Returns the items that pass, in their original order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
