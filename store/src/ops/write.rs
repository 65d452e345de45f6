//! WRITE operations - bulk save, and single-row update/append.

use std::path::Path;

use csvbind_codec::{header_line, serialize};
use csvbind_schema::{Record, Schema};
use tracing::debug;

use super::{load_document, materialize_table};
use crate::document::{file_line, CsvDocument, DocumentState};
use crate::error::{RowKey, StoreError, StoreResult};
use crate::result::{WriteMode, WriteOutcome};
use crate::storage::Storage;

/// Replace the whole file with a schema-ordered header and one line per record.
pub fn execute_write_all<R: Record, S: Storage>(
    storage: &S,
    path: &Path,
    records: &[R],
) -> StoreResult<()> {
    let schema = Schema::<R>::resolve()?;
    let header: Vec<String> = schema.columns().map(str::to_string).collect();

    let mut doc = CsvDocument::from_lines(vec![header_line(&schema)]);
    for record in records {
        doc.push_line(serialize(record, &header, &schema));
    }

    storage
        .write_string(path, &doc.to_text())
        .map_err(|e| StoreError::io(path, e))?;
    debug!(path = %path.display(), rows = records.len(), "wrote all rows");
    Ok(())
}

/// Update or append one row, locating it with `predicate`.
pub fn execute_write_one<R, S, P>(
    storage: &S,
    path: &Path,
    record: &R,
    predicate: P,
    mode: WriteMode,
) -> StoreResult<WriteOutcome>
where
    R: Record,
    S: Storage,
    P: Fn(&R) -> bool,
{
    let doc = load_document(storage, path)?;
    let schema = Schema::<R>::resolve()?;
    write_keyed(
        storage,
        path,
        doc,
        &schema,
        record,
        mode,
        RowKey::Predicate,
        predicate,
    )
}

/// Update or append one row, keyed by `record`'s value in `column`.
///
/// The column must be bound by the record type, and must be named in the
/// header whenever the file has one.
pub fn execute_write_one_where<R: Record, S: Storage>(
    storage: &S,
    path: &Path,
    record: &R,
    column: &str,
    mode: WriteMode,
) -> StoreResult<WriteOutcome> {
    let doc = load_document(storage, path)?;
    let schema = Schema::<R>::resolve()?;
    let binding = schema
        .get(column)
        .ok_or_else(|| StoreError::filter_column_not_found(column, path))?;
    if let Some(header) = doc.header() {
        if !header.iter().any(|c| c == column) {
            return Err(StoreError::filter_column_not_found(column, path));
        }
    }

    let key = binding.render(record);
    write_keyed(
        storage,
        path,
        doc,
        &schema,
        record,
        mode,
        RowKey::column(column, key.clone()),
        |row| binding.render(row) == key,
    )
}

#[allow(clippy::too_many_arguments)]
fn write_keyed<R, S, P>(
    storage: &S,
    path: &Path,
    mut doc: CsvDocument,
    schema: &Schema<R>,
    record: &R,
    mode: WriteMode,
    key: RowKey,
    matches: P,
) -> StoreResult<WriteOutcome>
where
    R: Record,
    S: Storage,
    P: Fn(&R) -> bool,
{
    let outcome = match (doc.state(), mode) {
        (DocumentState::Empty, WriteMode::Append) => {
            // No header yet: start the file from the schema.
            let header: Vec<String> = schema.columns().map(str::to_string).collect();
            doc.push_line(header_line(schema));
            doc.push_line(serialize(record, &header, schema));
            WriteOutcome::Appended {
                line: doc.line_count(),
            }
        }
        (DocumentState::HeaderOnly, WriteMode::Append) => {
            let header = doc.header().unwrap_or_default();
            doc.push_line(serialize(record, &header, schema));
            WriteOutcome::Appended {
                line: doc.line_count(),
            }
        }
        (DocumentState::Empty | DocumentState::HeaderOnly, WriteMode::Update) => {
            return Err(StoreError::update_target_missing(key, path));
        }
        (DocumentState::Populated, _) => {
            let table = materialize_table(&doc, schema, path)?;
            let found = table.records.iter().position(|row| matches(row));
            match (found, mode) {
                (Some(i), WriteMode::Update) => {
                    doc.replace_data_line(i, serialize(record, &table.header, schema));
                    WriteOutcome::Updated { line: file_line(i) }
                }
                (Some(i), WriteMode::Append) => {
                    return Err(StoreError::duplicate_key(key, file_line(i), path));
                }
                (None, WriteMode::Append) => {
                    doc.push_line(serialize(record, &table.header, schema));
                    WriteOutcome::Appended {
                        line: doc.line_count(),
                    }
                }
                (None, WriteMode::Update) => {
                    return Err(StoreError::update_target_missing(key, path));
                }
            }
        }
    };

    storage
        .write_string(path, &doc.to_text())
        .map_err(|e| StoreError::io(path, e))?;
    debug!(
        path = %path.display(),
        mode = %mode,
        line = outcome.line(),
        "wrote row"
    );
    Ok(outcome)
}
