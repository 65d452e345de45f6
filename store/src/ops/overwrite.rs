//! OVERWRITE operations - fill a caller-owned record from a matching row.

use std::path::Path;

use csvbind_codec::materialize_into;
use csvbind_schema::{Record, Schema};
use tracing::debug;

use super::{
    load_document, materialize_table, require_header_column, require_populated, select_first,
    Table,
};
use crate::document::file_line;
use crate::error::{StoreError, StoreResult};
use crate::storage::Storage;

/// Assign the first row satisfying `predicate` onto `target`.
///
/// Only fields bound by the schema and named in the file header are touched.
/// Returns whether a row was applied; `target` is unchanged when none matched.
pub fn execute_overwrite<R, S, P>(
    storage: &S,
    path: &Path,
    target: &mut R,
    predicate: P,
) -> StoreResult<bool>
where
    R: Record,
    S: Storage,
    P: Fn(&R) -> bool,
{
    let doc = load_document(storage, path)?;
    require_populated(&doc, path)?;
    let schema = Schema::<R>::resolve()?;

    let table = materialize_table(&doc, &schema, path)?;
    let matches = table.matching(predicate);
    apply_first(&table, &matches, &schema, target, path)
}

/// Assign the first row whose `column` value equals `target`'s own onto `target`.
pub fn execute_overwrite_where<R: Record, S: Storage>(
    storage: &S,
    path: &Path,
    target: &mut R,
    column: &str,
) -> StoreResult<bool> {
    let doc = load_document(storage, path)?;
    require_populated(&doc, path)?;
    let schema = Schema::<R>::resolve()?;
    let binding = schema
        .get(column)
        .ok_or_else(|| StoreError::filter_column_not_found(column, path))?;
    require_header_column(&doc, column, path)?;

    let key = binding.render(target);
    let table = materialize_table(&doc, &schema, path)?;
    let matches = table.matching(|record| binding.render(record) == key);
    apply_first(&table, &matches, &schema, target, path)
}

fn apply_first<R>(
    table: &Table<R>,
    matches: &[usize],
    schema: &Schema<R>,
    target: &mut R,
    path: &Path,
) -> StoreResult<bool> {
    let Some(i) = select_first(matches, path) else {
        return Ok(false);
    };
    materialize_into(target, &table.header, &table.rows[i], schema)
        .map_err(|e| StoreError::codec(path, file_line(i), e))?;
    debug!(path = %path.display(), line = file_line(i), "overwrote record from row");
    Ok(true)
}
