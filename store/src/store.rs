//! CsvStore - the mutation engine callers use.
//!
//! The store delegates to operation modules in `ops/`:
//! - `ops/read.rs` - read all rows, read the first matching row
//! - `ops/overwrite.rs` - fill an existing record from a matching row
//! - `ops/write.rs` - bulk save, single-row update/append
//!
//! Every call re-reads the file and re-resolves the record schema. Nothing is
//! cached between calls.

use std::fmt::Display;
use std::path::Path;

use csvbind_schema::Record;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::ops;
use crate::result::{WriteMode, WriteOutcome};
use crate::storage::{FileStorage, Storage};

/// Typed record access to CSV files through a [`Storage`].
#[derive(Debug, Default)]
pub struct CsvStore<S = FileStorage> {
    storage: S,
}

impl CsvStore<FileStorage> {
    /// A store over OS files with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store over OS files.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            storage: FileStorage::new(config),
        }
    }
}

impl<S: Storage> CsvStore<S> {
    /// A store over any storage backend.
    pub fn with_storage(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Read every data row.
    ///
    /// Fails with `FileNotFound`, or `InsufficientData` when the file has no
    /// data rows.
    pub fn read_all<R: Record>(&self, path: impl AsRef<Path>) -> StoreResult<Vec<R>> {
        ops::execute_read_all(&self.storage, path.as_ref())
    }

    /// Read the first row satisfying `predicate`.
    ///
    /// No match is `Ok(None)`; several matches return the first. Both are
    /// logged as warnings.
    pub fn read_filtered<R, P>(&self, path: impl AsRef<Path>, predicate: P) -> StoreResult<Option<R>>
    where
        R: Record,
        P: Fn(&R) -> bool,
    {
        ops::execute_read_filtered(&self.storage, path.as_ref(), predicate)
    }

    /// Read the first row whose cell in `column` reads exactly `value`.
    pub fn read_where<R: Record>(
        &self,
        path: impl AsRef<Path>,
        column: &str,
        value: impl Display,
    ) -> StoreResult<Option<R>> {
        ops::execute_read_where(&self.storage, path.as_ref(), column, &value.to_string())
    }

    /// Fill `target` from the first row satisfying `predicate`.
    ///
    /// Ignored fields and fields the file header does not name are left
    /// alone. Returns `false`, leaving `target` unchanged, when nothing matched.
    pub fn overwrite_into<R, P>(
        &self,
        path: impl AsRef<Path>,
        target: &mut R,
        predicate: P,
    ) -> StoreResult<bool>
    where
        R: Record,
        P: Fn(&R) -> bool,
    {
        ops::execute_overwrite(&self.storage, path.as_ref(), target, predicate)
    }

    /// Fill `target` from the first row sharing its value in `column`.
    pub fn overwrite_where<R: Record>(
        &self,
        path: impl AsRef<Path>,
        target: &mut R,
        column: &str,
    ) -> StoreResult<bool> {
        ops::execute_overwrite_where(&self.storage, path.as_ref(), target, column)
    }

    /// Replace the file with `records` under a header in schema order.
    pub fn write_all<R: Record>(&self, path: impl AsRef<Path>, records: &[R]) -> StoreResult<()> {
        ops::execute_write_all(&self.storage, path.as_ref(), records)
    }

    /// Update or append a single row located by `predicate`.
    ///
    /// Update requires an existing match (`UpdateTargetMissing` otherwise);
    /// Append requires none (`DuplicateKey` otherwise). Only the affected line
    /// changes.
    pub fn write_one<R, P>(
        &self,
        path: impl AsRef<Path>,
        record: &R,
        predicate: P,
        mode: WriteMode,
    ) -> StoreResult<WriteOutcome>
    where
        R: Record,
        P: Fn(&R) -> bool,
    {
        ops::execute_write_one(&self.storage, path.as_ref(), record, predicate, mode)
    }

    /// Update or append a single row keyed by `record`'s value in `column`.
    ///
    /// `column` must be bound by the record type, since its rendered value is
    /// the key, and must also be named in the file header when the file has
    /// one. Either miss is `FilterColumnNotFound`.
    pub fn write_one_where<R: Record>(
        &self,
        path: impl AsRef<Path>,
        record: &R,
        column: &str,
        mode: WriteMode,
    ) -> StoreResult<WriteOutcome> {
        ops::execute_write_one_where(&self.storage, path.as_ref(), record, column, mode)
    }
}
