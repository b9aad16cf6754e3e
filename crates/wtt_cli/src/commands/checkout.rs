//! Checkout and return commands.

use super::CommandResult;
use crate::error::CliError;
use crate::output;
use std::io::{BufRead, Write};
use wtt_core::ItemRepository;

fn prompt(checked_out: bool) -> &'static str {
    if checked_out {
        "Mark this item as checked out?"
    } else {
        "Mark this item as returned (available)?"
    }
}

/// Reads a yes/no answer; anything but `y` or `yes` is no.
fn confirm(question: &str, input: &mut impl BufRead, out: &mut impl Write) -> std::io::Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Sets the checked-out flag of item `id`, asking first unless `yes`.
pub fn run(
    repo: &ItemRepository,
    id: &str,
    checked_out: bool,
    yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> CommandResult {
    let item = repo
        .find_by_id(id)
        .ok_or_else(|| CliError::ItemNotFound(id.to_string()))?;

    if item.checked_out == checked_out {
        writeln!(out, "{} is already {}.", item.id, output::status_label(&item))?;
        return Ok(());
    }

    if !yes && !confirm(prompt(checked_out), input, out)? {
        writeln!(out, "Cancelled.")?;
        return Ok(());
    }

    let updated = repo
        .set_checked_out(id, checked_out)?
        .ok_or_else(|| CliError::ItemNotFound(id.to_string()))?;
    writeln!(out, "{} is now {}.", updated.id, output::status_label(&updated))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wtt_testkit::scenarios;

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> CommandResult) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn checkout_with_yes_skips_prompt() {
        let test_repo = scenarios::demo_repository();
        let text = output_of(|out| {
            run(&test_repo, "WTT-000101", true, true, &mut Cursor::new(""), out)
        });

        assert_eq!(text, "WTT-000101 is now Checked Out.\n");
        assert!(test_repo.find_by_id("WTT-000101").unwrap().checked_out);
    }

    #[test]
    fn confirmed_return() {
        let test_repo = scenarios::demo_repository();
        let text = output_of(|out| {
            run(&test_repo, "WTT-000102", false, false, &mut Cursor::new("y\n"), out)
        });

        assert!(text.starts_with("Mark this item as returned (available)? [y/N] "));
        assert!(text.ends_with("WTT-000102 is now Available.\n"));
        assert!(!test_repo.find_by_id("WTT-000102").unwrap().checked_out);
    }

    #[test]
    fn declined_prompt_changes_nothing() {
        let test_repo = scenarios::demo_repository();
        let before = test_repo.list_all();
        let text = output_of(|out| {
            run(&test_repo, "WTT-000101", true, false, &mut Cursor::new("n\n"), out)
        });

        assert!(text.ends_with("Cancelled.\n"));
        assert_eq!(test_repo.list_all(), before);
    }

    #[test]
    fn already_in_state_is_reported() {
        let test_repo = scenarios::demo_repository();
        let text = output_of(|out| {
            run(&test_repo, "WTT-000105", true, true, &mut Cursor::new(""), out)
        });
        assert_eq!(text, "WTT-000105 is already Checked Out.\n");
    }

    #[test]
    fn unknown_item_fails() {
        let test_repo = scenarios::demo_repository();
        let result = run(&test_repo, "WTT-000001", true, true, &mut Cursor::new(""), &mut Vec::new());
        assert!(result.is_err());
    }
}
