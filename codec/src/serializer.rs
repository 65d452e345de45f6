//! Record serializer: record + header + schema -> data line.

use csvbind_core::{DELIMITER, QUOTE};
use csvbind_schema::Schema;

/// Render a record as one data line, in the column order of `header`.
///
/// A header column with no binding produces an empty cell, so the line always
/// has exactly as many cells as the header.
pub fn serialize<R>(record: &R, header: &[String], schema: &Schema<R>) -> String {
    join_cells(header.iter().map(|column| match schema.get(column) {
        Some(binding) => quote_cell(binding.render(record)),
        None => String::new(),
    }))
}

/// The header line of a freshly written file: schema columns in declaration order.
pub fn header_line<R>(schema: &Schema<R>) -> String {
    join_cells(schema.columns().map(str::to_string))
}

/// Wrap a cell in quotes if it contains the delimiter.
///
/// Quotes already inside the text are not escaped.
pub fn quote_cell(text: String) -> String {
    if text.contains(DELIMITER) {
        format!("{QUOTE}{text}{QUOTE}")
    } else {
        text
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(&cell);
    }
    line
}
