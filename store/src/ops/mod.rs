//! Store operation implementations.
//!
//! Each operation family (read, overwrite, write) lives in its own module.
//! Every operation loads the whole document, resolves the schema afresh and
//! works on the full line array in memory.

mod overwrite;
mod read;
mod write;

pub use overwrite::{execute_overwrite, execute_overwrite_where};
pub use read::{execute_read_all, execute_read_filtered, execute_read_where};
pub use write::{execute_write_all, execute_write_one, execute_write_one_where};

use std::path::Path;

use csvbind_codec::{materialize, split_line};
use csvbind_schema::{Record, Schema};
use tracing::warn;

use crate::document::{file_line, CsvDocument, DocumentState};
use crate::error::{StoreError, StoreResult};
use crate::storage::Storage;

/// A populated document fully materialized.
struct Table<R> {
    header: Vec<String>,
    /// Raw cells per data row.
    rows: Vec<Vec<String>>,
    /// One record per data row, same order as `rows`.
    records: Vec<R>,
}

impl<R> Table<R> {
    /// Indices of records satisfying `predicate`, in file order.
    fn matching(&self, predicate: impl Fn(&R) -> bool) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| predicate(*record))
            .map(|(i, _)| i)
            .collect()
    }
}

fn load_document<S: Storage>(storage: &S, path: &Path) -> StoreResult<CsvDocument> {
    if !storage.exists(path) {
        return Err(StoreError::file_not_found(path));
    }
    let text = storage
        .read_to_string(path)
        .map_err(|e| StoreError::io(path, e))?;
    Ok(CsvDocument::parse(&text))
}

fn require_populated(doc: &CsvDocument, path: &Path) -> StoreResult<()> {
    if doc.state() != DocumentState::Populated {
        return Err(StoreError::insufficient_data(path, doc.line_count()));
    }
    Ok(())
}

/// The header of a document, which must name `column`.
fn require_header_column(doc: &CsvDocument, column: &str, path: &Path) -> StoreResult<usize> {
    doc.header()
        .and_then(|header| header.iter().position(|c| c == column))
        .ok_or_else(|| StoreError::filter_column_not_found(column, path))
}

/// Materialize every data row. Any failing row aborts the whole operation.
fn materialize_table<R: Record>(
    doc: &CsvDocument,
    schema: &Schema<R>,
    path: &Path,
) -> StoreResult<Table<R>> {
    let header = doc.header().unwrap_or_default();
    let mut rows = Vec::with_capacity(doc.data_lines().len());
    let mut records = Vec::with_capacity(doc.data_lines().len());

    for (i, line) in doc.data_lines().iter().enumerate() {
        let cells = split_line(line);
        let record =
            materialize(&header, &cells, schema).map_err(|e| StoreError::codec(path, file_line(i), e))?;
        rows.push(cells);
        records.push(record);
    }

    Ok(Table {
        header,
        rows,
        records,
    })
}

/// First-match tie-break. Zero and multiple matches are reported, not failed.
fn select_first(matches: &[usize], path: &Path) -> Option<usize> {
    match matches {
        [] => {
            warn!(path = %path.display(), "no row matched");
            None
        }
        [only] => Some(*only),
        [first, ..] => {
            warn!(
                path = %path.display(),
                matches = matches.len(),
                line = file_line(*first),
                "multiple rows matched; using the first"
            );
            Some(*first)
        }
    }
}
