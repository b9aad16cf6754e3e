//! Inventory item record.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Physical condition of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Like new.
    Excellent,
    /// Normal wear.
    Good,
    /// Visible wear, still usable.
    Fair,
    /// Must be fixed before use.
    #[serde(rename = "Needs Repair")]
    NeedsRepair,
}

impl Condition {
    /// All conditions, best first.
    pub const ALL: [Condition; 4] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::NeedsRepair,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::NeedsRepair => "Needs Repair",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no [`Condition`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown condition: {0:?} (expected Excellent, Good, Fair or Needs Repair)")]
pub struct ParseConditionError(String);

impl FromStr for Condition {
    type Err = ParseConditionError;

    /// Parses a label, ignoring case, spaces, hyphens and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "excellent" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "needsrepair" => Ok(Condition::NeedsRepair),
            _ => Err(ParseConditionError(s.to_string())),
        }
    }
}

/// A catalog record.
///
/// Field names are serialized in camelCase (`checkedOut`, `updatedAt`).
/// `updated_at` is owned by the repository: whatever the caller puts there
/// is overwritten on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier, e.g. `WTT-000001`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category. Any string is accepted.
    pub category: String,
    /// Where the item is kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Physical condition. A stored label that names no [`Condition`]
    /// reads as `None` rather than failing the whole collection.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_condition"
    )]
    pub condition: Option<Condition>,
    /// Whether the item is currently checked out.
    #[serde(default)]
    pub checked_out: bool,
    /// Milliseconds since the Unix epoch of the last write.
    #[serde(default)]
    pub updated_at: i64,
}

fn deserialize_condition<'de, D>(deserializer: D) -> Result<Option<Condition>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.and_then(|label| match label.parse() {
        Ok(condition) => Some(condition),
        Err(e) => {
            warn!(error = %e, "dropping stored condition");
            None
        }
    }))
}

impl Item {
    /// Creates an available item with no location or condition.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            location: None,
            condition: None,
            checked_out: false,
            updated_at: 0,
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the condition.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Sets the checked-out flag.
    #[must_use]
    pub fn with_checked_out(mut self, checked_out: bool) -> Self {
        self.checked_out = checked_out;
        self
    }

    /// Sets the update timestamp.
    #[must_use]
    pub fn with_updated_at(mut self, updated_at: i64) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Returns true if every field except `updated_at` matches `other`.
    #[must_use]
    pub fn same_content(&self, other: &Item) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.category == other.category
            && self.location == other.location
            && self.condition == other.condition
            && self.checked_out == other.checked_out
    }
}
