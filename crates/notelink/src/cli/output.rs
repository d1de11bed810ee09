//! Rendering helpers for CLI output.

use colored::Colorize;
use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use notelink_scan::DocumentLinks;

/// Formats a section header.
pub fn header(text: &str) -> String {
    text.bold().to_string()
}

/// Formats de-emphasized text.
pub fn dim(text: &str) -> String {
    text.dimmed().to_string()
}

/// Renders scan reports as per-note tables.
///
/// Notes without links are summarized in one dim line at the end so a
/// whole-vault scan stays readable.
pub fn render_reports(reports: &[DocumentLinks]) {
    if reports.iter().all(|report| report.links.is_empty()) {
        println!("{}", dim("No unlinked mentions found."));
        return;
    }

    let mut clean = 0usize;
    for report in reports {
        if report.links.is_empty() {
            clean += 1;
            continue;
        }

        let count = report.links.len();
        let noun = if count == 1 { "potential link" } else { "potential links" };
        println!(
            "{} {}",
            header(&report.path.display().to_string()),
            dim(&format!("({count} {noun})"))
        );
        println!("{}", links_table(report));
        println!();
    }

    if clean > 0 {
        println!("{}", dim(&format!("{clean} note(s) without unlinked mentions.")));
    }
}

/// Builds the table for one note's links.
fn links_table(report: &DocumentLinks) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "MATCH", "TARGET", "VIA ALIAS", "PREVIEW"]);
    for link in &report.links {
        table.add_row(vec![
            Cell::new(link.id.to_string()),
            Cell::new(&link.match_text),
            Cell::new(&link.linked_title),
            Cell::new(link.matched_alias.as_deref().unwrap_or("-")),
            Cell::new(&link.preview),
        ]);
    }
    table
}
