//! Edit command implementation.

use super::CommandResult;
use crate::error::CliError;
use crate::output;
use std::io::Write;
use wtt_core::{Condition, Item, ItemRepository};

/// Fields to change. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct EditForm {
    /// New name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New location; blank clears it.
    pub location: Option<String>,
    /// New condition.
    pub condition: Option<Condition>,
}

impl EditForm {
    /// Applies the changes to a copy of `item`.
    pub fn apply(&self, item: &Item) -> Result<Item, CliError> {
        let mut edited = item.clone();

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(CliError::NameRequired);
            }
            edited.name = name.to_string();
        }
        if let Some(category) = &self.category {
            edited.category = category.clone();
        }
        if let Some(location) = &self.location {
            let location = location.trim();
            edited.location = (!location.is_empty()).then(|| location.to_string());
        }
        if let Some(condition) = self.condition {
            edited.condition = Some(condition);
        }
        Ok(edited)
    }
}

/// Runs the edit command.
pub fn run(
    repo: &ItemRepository,
    id: &str,
    changes: &EditForm,
    out: &mut impl Write,
) -> CommandResult {
    let item = repo
        .find_by_id(id)
        .ok_or_else(|| CliError::ItemNotFound(id.to_string()))?;
    let edited = changes.apply(&item)?;

    if edited.same_content(&item) {
        writeln!(out, "No changes.")?;
        return Ok(());
    }

    let stored = repo.upsert(edited)?;
    writeln!(out, "Item saved successfully.")?;
    output::write_detail(out, &stored, repo.now())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtt_testkit::{scenarios, FIXTURE_EPOCH};

    #[test]
    fn edit_changes_fields_in_place() {
        let test_repo = scenarios::demo_repository();
        test_repo.clock.advance(1_000);
        let changes = EditForm {
            name: Some(" Oak Rolltop Desk (restored) ".to_string()),
            condition: Some(Condition::Good),
            ..EditForm::default()
        };

        run(&test_repo, "WTT-000108", &changes, &mut Vec::new()).unwrap();

        let items = test_repo.list_all();
        assert_eq!(items[7].id, "WTT-000108");
        assert_eq!(items[7].name, "Oak Rolltop Desk (restored)");
        assert_eq!(items[7].condition, Some(Condition::Good));
        assert_eq!(items[7].location.as_deref(), Some("Bay 3"));
        assert_eq!(items[7].updated_at, FIXTURE_EPOCH + 1_000);
    }

    #[test]
    fn blank_location_clears_it() {
        let test_repo = scenarios::demo_repository();
        let changes = EditForm {
            location: Some(String::new()),
            ..EditForm::default()
        };
        run(&test_repo, "WTT-000101", &changes, &mut Vec::new()).unwrap();
        assert!(test_repo.find_by_id("WTT-000101").unwrap().location.is_none());
    }

    #[test]
    fn unchanged_edit_does_not_write() {
        let test_repo = scenarios::demo_repository();
        let before = test_repo.find_by_id("WTT-000101").unwrap();
        test_repo.clock.advance(1_000);

        let changes = EditForm {
            name: Some(before.name.clone()),
            ..EditForm::default()
        };
        let mut buf = Vec::new();
        run(&test_repo, "WTT-000101", &changes, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "No changes.\n");
        assert_eq!(test_repo.find_by_id("WTT-000101").unwrap(), before);
    }

    #[test]
    fn blank_name_is_rejected() {
        let test_repo = scenarios::demo_repository();
        let changes = EditForm {
            name: Some("  ".to_string()),
            ..EditForm::default()
        };
        assert!(run(&test_repo, "WTT-000101", &changes, &mut Vec::new()).is_err());
    }

    #[test]
    fn unknown_id_is_reported() {
        let test_repo = scenarios::demo_repository();
        let err = run(&test_repo, "WTT-000001", &EditForm::default(), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Item not found: WTT-000001");
    }
}
