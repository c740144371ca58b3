//! Table formatting utilities for CLI output.

use std::fmt::Write as _;

use hotel_admin_gui::{Column, HotelTable};

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use hotel_admin_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

const fn column_width(column: Column) -> usize {
    match column {
        Column::Name => 32,
        Column::Rating => 8,
        Column::PricePerNight => 16,
    }
}

const ID_WIDTH: usize = 38;

/// Render the visible columns and rows of `table`, with the page footer.
pub fn render_hotel_table(table: &HotelTable) -> String {
    let columns = table.visible_columns();
    let width = ID_WIDTH + columns.iter().map(|c| column_width(*c) + 1).sum::<usize>();
    let mut out = String::new();

    let _ = write!(out, "{:<w$}", "ID", w = ID_WIDTH);
    for column in &columns {
        let _ = write!(out, " {:<w$}", column.header(), w = column_width(*column));
    }
    out.push('\n');
    out.push_str(&separator(width));
    out.push('\n');

    let rows = table.rows();
    if let Some(message) = table.empty_message() {
        out.push_str(message);
        out.push('\n');
    }
    for row in rows {
        let _ = write!(out, "{:<w$}", truncate_string(&row.id, ID_WIDTH - 1), w = ID_WIDTH);
        for (column, text) in &row.cells {
            let w = column_width(*column);
            let _ = write!(out, " {:<w$}", truncate_string(text, w - 1));
        }
        out.push('\n');
    }

    out.push_str(&separator(width));
    out.push('\n');
    out.push_str(&table.page_label());
    out
}
