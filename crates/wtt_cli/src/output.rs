//! Text rendering of items.

use clap::ValueEnum;
use std::io::{self, Write};
use wtt_core::Item;

/// Output format of `list` and `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Status label of an item.
pub fn status_label(item: &Item) -> &'static str {
    if item.checked_out {
        "Checked Out"
    } else {
        "Available"
    }
}

/// Describes how long ago `then` was, relative to `now` (both in ms).
pub fn format_age(now: i64, then: i64) -> String {
    let seconds = now.saturating_sub(then).max(0) / 1000;
    match seconds {
        0..=59 => "just now".to_string(),
        60..=3_599 => plural(seconds / 60, "minute"),
        3_600..=86_399 => plural(seconds / 3_600, "hour"),
        _ => plural(seconds / 86_400, "day"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Writes a table of items.
pub fn write_table<'a>(
    out: &mut impl Write,
    items: impl IntoIterator<Item = &'a Item>,
) -> io::Result<()> {
    writeln!(out, "{:<12} {:<28} {:<12} {}", "ID", "Name", "Category", "Status")?;
    for item in items {
        writeln!(
            out,
            "{:<12} {:<28} {:<12} {}",
            item.id,
            item.name,
            item.category,
            status_label(item)
        )?;
    }
    Ok(())
}

/// Writes the full record of one item.
pub fn write_detail(out: &mut impl Write, item: &Item, now: i64) -> io::Result<()> {
    writeln!(out, "{}", item.name)?;
    writeln!(out, "  Item ID:   {}", item.id)?;
    writeln!(out, "  Category:  {}", item.category)?;
    writeln!(out, "  Location:  {}", item.location.as_deref().unwrap_or("-"))?;
    match item.condition {
        Some(condition) => writeln!(out, "  Condition: {condition}")?,
        None => writeln!(out, "  Condition: -")?,
    }
    writeln!(out, "  Status:    {}", status_label(item))?;
    writeln!(out, "  Updated:   {}", format_age(now, item.updated_at))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtt_core::Condition;

    #[test]
    fn age_buckets() {
        let now = 10 * 86_400_000;
        assert_eq!(format_age(now, now), "just now");
        assert_eq!(format_age(now, now + 5_000), "just now");
        assert_eq!(format_age(now, now - 60_000), "1 minute ago");
        assert_eq!(format_age(now, now - 15 * 60_000), "15 minutes ago");
        assert_eq!(format_age(now, now - 2 * 3_600_000), "2 hours ago");
        assert_eq!(format_age(now, now - 3 * 86_400_000), "3 days ago");
    }

    #[test]
    fn detail_lists_every_field() {
        let item = Item::new("WTT-000108", "Oak Rolltop Desk", "Furniture")
            .with_location("Bay 3")
            .with_condition(Condition::NeedsRepair)
            .with_updated_at(0);
        let mut buf = Vec::new();
        write_detail(&mut buf, &item, 3_600_000).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("WTT-000108"));
        assert!(text.contains("Bay 3"));
        assert!(text.contains("Needs Repair"));
        assert!(text.contains("Available"));
        assert!(text.contains("1 hour ago"));
    }

    #[test]
    fn table_has_header_and_rows() {
        let items = vec![
            Item::new("WTT-000001", "Camera", "Cameras").with_checked_out(true),
            Item::new("WTT-000002", "Lamp", "Props"),
        ];
        let mut buf = Vec::new();
        write_table(&mut buf, &items).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().nth(1).unwrap().ends_with("Checked Out"));
    }
}
