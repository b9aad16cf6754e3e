//! Show and scan commands.

use super::CommandResult;
use crate::error::CliError;
use crate::output::{self, Format};
use std::io::Write;
use tracing::debug;
use wtt_core::ItemRepository;

/// Runs the show command.
pub fn run(repo: &ItemRepository, id: &str, format: Format, out: &mut impl Write) -> CommandResult {
    let item = repo
        .find_by_id(id)
        .ok_or_else(|| CliError::ItemNotFound(id.to_string()))?;

    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&item)?)?,
        Format::Text => output::write_detail(out, &item, repo.now())?,
    }
    Ok(())
}

/// Looks up the item named by a decoded label.
///
/// Surrounding whitespace is stripped; the rest is matched exactly.
pub fn scan(repo: &ItemRepository, code: &str, out: &mut impl Write) -> CommandResult {
    let code = code.trim();
    if code.is_empty() {
        return Err(CliError::EmptyCode.into());
    }
    debug!(%code, "looking up scanned code");
    run(repo, code, Format::Text, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtt_testkit::scenarios;

    #[test]
    fn show_prints_detail() {
        let test_repo = scenarios::demo_repository();
        let mut buf = Vec::new();
        run(&test_repo, "WTT-000113", Format::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("1940s Trench Coat"));
        assert!(text.contains("Wardrobe 1"));
    }

    #[test]
    fn show_json_is_the_stored_record() {
        let test_repo = scenarios::demo_repository();
        let mut buf = Vec::new();
        run(&test_repo, "WTT-000105", Format::Json, &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["checkedOut"], true);
    }

    #[test]
    fn show_unknown_id_fails() {
        let test_repo = scenarios::demo_repository();
        let err = run(&test_repo, "WTT-999999", Format::Text, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Item not found: WTT-999999");
    }

    #[test]
    fn scan_trims_but_matches_exactly() {
        let test_repo = scenarios::demo_repository();
        let mut buf = Vec::new();
        scan(&test_repo, "  WTT-000116\n", &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Brass Telescope"));

        assert!(scan(&test_repo, "wtt-000116", &mut Vec::new()).is_err());
    }

    #[test]
    fn scan_rejects_blank_code() {
        let test_repo = scenarios::demo_repository();
        let err = scan(&test_repo, "   ", &mut Vec::new()).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
