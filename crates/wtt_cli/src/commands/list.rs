//! List command implementation.

use super::CommandResult;
use crate::filter::ItemFilter;
use crate::output::{self, Format};
use serde::Serialize;
use std::io::Write;
use wtt_core::{Item, ItemRepository};

/// List result for JSON output.
#[derive(Debug, Serialize)]
pub struct ListResult<'a> {
    /// Number of items in the catalog.
    pub total: usize,
    /// Number of items that passed the filter.
    pub matched: usize,
    /// The matching items, newest first.
    pub items: Vec<&'a Item>,
}

/// Runs the list command.
pub fn run(
    repo: &ItemRepository,
    filter: &ItemFilter,
    format: Format,
    out: &mut impl Write,
) -> CommandResult {
    let all = repo.list_all();
    let matched = filter.apply(&all);

    match format {
        Format::Json => {
            let result = ListResult {
                total: all.len(),
                matched: matched.len(),
                items: matched,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        Format::Text => {
            if all.is_empty() {
                writeln!(out, "No items yet. Add one with `wtt add`, or run `wtt demo load`.")?;
            } else if matched.is_empty() {
                writeln!(out, "No items match the current search and filters.")?;
            } else {
                output::write_table(out, matched.iter().copied())?;
                if !filter.is_empty() {
                    writeln!(out, "\n{} of {} items", matched.len(), all.len())?;
                }
            }
        }
    }

    Ok(())
}
