//! Property-based test generators using proptest.
//!
//! Ids are drawn from a small pool so that generated operation sequences
//! hit existing items often.

use proptest::prelude::*;
use wtt_core::{catalog, Condition, Item};

/// Strategy for item identifiers, mostly `WTT-NNNNNN` with some odd shapes.
pub fn item_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (1u64..40).prop_map(|n| format!("WTT-{n:06}")),
        1 => prop::string::string_regex("[A-Z]{2,4}-[0-9]{1,8}").expect("Invalid regex"),
        1 => prop::string::string_regex("[a-z ]{0,8}").expect("Invalid regex"),
    ]
}

/// Strategy for conditions.
pub fn condition_strategy() -> impl Strategy<Value = Condition> {
    prop::sample::select(Condition::ALL.to_vec())
}

/// Strategy for categories, usually one of the catalog categories.
pub fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(catalog::CATEGORIES.to_vec()).prop_map(str::to_string),
        1 => prop::string::string_regex("[A-Za-z ]{0,12}").expect("Invalid regex"),
    ]
}

/// Strategy for whole items with an arbitrary caller-supplied timestamp.
pub fn item_strategy() -> impl Strategy<Value = Item> {
    (
        item_id_strategy(),
        prop::string::string_regex("[A-Za-z0-9 ]{0,24}").expect("Invalid regex"),
        category_strategy(),
        prop::option::of(prop::string::string_regex("[A-Za-z0-9 /]{1,16}").expect("Invalid regex")),
        prop::option::of(condition_strategy()),
        any::<bool>(),
        any::<i64>(),
    )
        .prop_map(
            |(id, name, category, location, condition, checked_out, updated_at)| Item {
                id,
                name,
                category,
                location,
                condition,
                checked_out,
                updated_at,
            },
        )
}

/// A repository call.
#[derive(Debug, Clone)]
pub enum RepoOperation {
    /// Insert or update an item
    Upsert(Item),
    /// Set the checked-out flag
    SetCheckedOut {
        /// Item id
        id: String,
        /// New flag value
        checked_out: bool,
    },
    /// Allocate an identifier
    NextId,
    /// Look an item up
    Find {
        /// Item id
        id: String,
    },
}

/// Strategy for a single repository operation (no bulk operations).
pub fn repo_operation_strategy() -> impl Strategy<Value = RepoOperation> {
    prop_oneof![
        4 => item_strategy().prop_map(RepoOperation::Upsert),
        2 => (item_id_strategy(), any::<bool>())
            .prop_map(|(id, checked_out)| RepoOperation::SetCheckedOut { id, checked_out }),
        2 => Just(RepoOperation::NextId),
        1 => item_id_strategy().prop_map(|id| RepoOperation::Find { id }),
    ]
}

/// Strategy for a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<RepoOperation>> {
    prop::collection::vec(repo_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
