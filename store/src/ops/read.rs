//! READ operations - load all rows, or the first row matching a filter.

use std::path::Path;

use csvbind_schema::{Record, Schema};
use tracing::debug;

use super::{
    load_document, materialize_table, require_header_column, require_populated, select_first,
};
use crate::error::StoreResult;
use crate::storage::Storage;

/// Materialize every data row, in file order.
pub fn execute_read_all<R: Record, S: Storage>(storage: &S, path: &Path) -> StoreResult<Vec<R>> {
    let doc = load_document(storage, path)?;
    require_populated(&doc, path)?;
    let schema = Schema::<R>::resolve()?;

    let table = materialize_table(&doc, &schema, path)?;
    debug!(path = %path.display(), rows = table.records.len(), "read all rows");
    Ok(table.records)
}

/// First record satisfying `predicate`, or `None`.
pub fn execute_read_filtered<R, S, P>(
    storage: &S,
    path: &Path,
    predicate: P,
) -> StoreResult<Option<R>>
where
    R: Record,
    S: Storage,
    P: Fn(&R) -> bool,
{
    let doc = load_document(storage, path)?;
    require_populated(&doc, path)?;
    let schema = Schema::<R>::resolve()?;

    let mut table = materialize_table(&doc, &schema, path)?;
    let matches = table.matching(predicate);
    debug!(path = %path.display(), matches = matches.len(), "filtered read");
    Ok(select_first(&matches, path).map(|i| table.records.swap_remove(i)))
}

/// First record whose raw cell in `column` equals `value`, or `None`.
///
/// The column must appear in the file header; it need not be bound by the
/// record type.
pub fn execute_read_where<R: Record, S: Storage>(
    storage: &S,
    path: &Path,
    column: &str,
    value: &str,
) -> StoreResult<Option<R>> {
    let doc = load_document(storage, path)?;
    require_populated(&doc, path)?;
    let schema = Schema::<R>::resolve()?;
    let position = require_header_column(&doc, column, path)?;

    let mut table = materialize_table(&doc, &schema, path)?;
    let matches: Vec<usize> = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, cells)| cells.get(position).is_some_and(|cell| cell == value))
        .map(|(i, _)| i)
        .collect();
    debug!(path = %path.display(), column, value, matches = matches.len(), "filtered read");
    Ok(select_first(&matches, path).map(|i| table.records.swap_remove(i)))
}
