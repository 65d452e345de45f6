//! csvbind Store
//!
//! Typed record access to CSV files.
//!
//! Responsibilities:
//! - Load a whole CSV document and materialize its rows into records
//! - Locate rows by predicate or by key column
//! - Update or append single rows, leaving every other line untouched
//! - Rewrite whole files from a record list
//!
//! # Module Structure
//!
//! - `store` - `CsvStore`, the entry point that coordinates operations
//! - `ops/` - Operation implementations (read, overwrite, write)
//! - `document` - The in-memory line array of one file
//! - `storage` - Whole-file storage backends (memory, OS files)
//! - `config` - Settings for file storage
//! - `error` - Error types for store failures
//! - `result` - Write modes and outcomes

mod config;
mod document;
mod error;
mod ops;
mod result;
mod storage;
mod store;

pub use config::StoreConfig;
pub use document::{CsvDocument, DocumentState};
pub use error::{RowKey, StoreError, StoreResult};
pub use result::{WriteMode, WriteOutcome};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::CsvStore;

pub use csvbind_schema::{FieldSet, Record};
