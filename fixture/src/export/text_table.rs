//! Aligned plain-text table for terminals.

use super::csv_writer::CSV_HEADER;
use super::rows::rows;
use crate::schedule::Fixture;

/// Render the fixture as an aligned text table, one line per match
pub fn to_text_table(fixture: &Fixture) -> String {
    let cells: Vec<[String; 5]> = rows(fixture)
        .map(|row| {
            [
                row.round.to_string(),
                row.table.to_string(),
                row.home.to_string(),
                row.away.to_string(),
                row.note.to_string(),
            ]
        })
        .collect();

    let mut widths = CSV_HEADER.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &CSV_HEADER, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
