//! Table row pipe repair.
//!
//! A row that opens with `|` but never closes its last cell confuses
//! GFM table parsing; append the missing trailing pipe. Prose segments
//! only, so shell pipelines quoted in code stay untouched.

use crate::segment;

/// Append a trailing `|` to prose lines that start with `|` but lack one.
pub fn close_row_pipes(text: &str) -> String {
    segment::apply_to_prose(text, |prose| {
        let rows: Vec<String> = prose.split('\n').map(close_row).collect();
        rows.join("\n")
    })
}

fn close_row(line: &str) -> String {
    let trimmed = line.trim_end();
    if trimmed.starts_with('|') && trimmed.len() > 1 && !trimmed.ends_with('|') {
        format!("{trimmed} |")
    } else {
        line.to_string()
    }
}
