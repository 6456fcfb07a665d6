// lessonguard/src/ui/redaction_summary.rs
//! Renders per-category redaction counts as a table.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use lessonguard_core::RedactionSummaryItem;
use std::io::{self, Write};

use crate::ui::output_format::print_header;

/// Builds the summary table. Rows keep the order of `summary`.
pub fn build_table(summary: &[RedactionSummaryItem], unicode: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if unicode { presets::UTF8_FULL } else { presets::ASCII_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Occurrences"]);

    for item in summary {
        table.add_row(vec![item.rule_name.clone(), item.occurrences.to_string()]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn total_occurrences(summary: &[RedactionSummaryItem]) -> usize {
    summary.iter().map(|item| item.occurrences).sum()
}

/// Writes the summary heading and table, or a one-line notice when empty.
pub fn print_summary<W: Write>(summary: &[RedactionSummaryItem], writer: &mut W, enable_colors: bool) -> io::Result<()> {
    print_header(writer, "--- Redaction Summary ---", enable_colors)?;
    if summary.is_empty() {
        writeln!(writer, "No sensitive content found.")?;
        return Ok(());
    }
    writeln!(writer, "{}", build_table(summary, enable_colors))?;
    writeln!(writer, "Total: {}", total_occurrences(summary))
}
