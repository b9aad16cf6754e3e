//! Add command implementation.

use super::CommandResult;
use crate::error::CliError;
use crate::output;
use std::io::Write;
use tracing::info;
use wtt_core::{Condition, Item, ItemRepository};

/// Values entered for a new item.
#[derive(Debug, Clone)]
pub struct AddForm {
    /// Item name, required.
    pub name: String,
    /// Category.
    pub category: String,
    /// Optional location.
    pub location: Option<String>,
    /// Condition.
    pub condition: Condition,
}

impl AddForm {
    /// Checks that the name is not blank.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.name.trim().is_empty() {
            return Err(CliError::NameRequired);
        }
        Ok(())
    }

    /// Checks the form and builds the item to store under `id`.
    pub fn to_item(&self, id: String) -> Result<Item, CliError> {
        self.validate()?;

        let mut item = Item::new(id, self.name.trim(), self.category.clone())
            .with_condition(self.condition);
        item.location = self
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        Ok(item)
    }
}

/// Runs the add command.
///
/// The name is checked before an identifier is allocated.
pub fn run(repo: &ItemRepository, form: &AddForm, out: &mut impl Write) -> CommandResult {
    form.validate()?;

    let id = repo.next_id()?;
    let item = repo.upsert(form.to_item(id)?)?;
    info!(id = %item.id, "item added");

    writeln!(out, "Item saved successfully.")?;
    output::write_detail(out, &item, repo.now())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtt_testkit::{with_temp_repo, TestRepository};

    fn form(name: &str, location: Option<&str>) -> AddForm {
        AddForm {
            name: name.to_string(),
            category: "Props".to_string(),
            location: location.map(str::to_string),
            condition: Condition::Good,
        }
    }

    #[test]
    fn add_allocates_id_and_stores_trimmed_values() {
        let test_repo = TestRepository::memory();
        let mut buf = Vec::new();
        run(&test_repo, &form("  Brass Telescope ", Some("  Cage A ")), &mut buf).unwrap();

        let item = test_repo.find_by_id("WTT-000001").unwrap();
        assert_eq!(item.name, "Brass Telescope");
        assert_eq!(item.location.as_deref(), Some("Cage A"));
        assert_eq!(item.condition, Some(Condition::Good));
        assert!(!item.checked_out);
        assert!(String::from_utf8(buf).unwrap().starts_with("Item saved successfully."));
    }

    #[test]
    fn blank_location_is_dropped() {
        with_temp_repo(|repo, _| {
            run(repo, &form("Lamp", Some("   ")), &mut Vec::new()).unwrap();
            assert!(repo.find_by_id("WTT-000001").unwrap().location.is_none());
        });
    }

    #[test]
    fn added_item_carries_current_time() {
        with_temp_repo(|repo, clock| {
            clock.set(1_710_000_000_000);
            run(repo, &form("Lamp", None), &mut Vec::new()).unwrap();
            assert_eq!(
                repo.find_by_id("WTT-000001").unwrap().updated_at,
                1_710_000_000_000
            );
        });
    }

    #[test]
    fn blank_name_is_rejected_without_using_an_id() {
        let test_repo = TestRepository::memory();
        let err = run(&test_repo, &form("   ", None), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Item name is required.");

        assert!(test_repo.list_all().is_empty());
        assert_eq!(test_repo.next_id().unwrap(), "WTT-000001");
    }
}
