//! csvbind integration test support.
//!
//! Fixture record types and a temporary CSV file helper shared by the
//! integration tests under `tests/`.

pub mod file;
pub mod fixtures;

/// Common imports for integration tests.
pub mod prelude {
    pub use crate::file::CsvFile;
    pub use crate::fixtures::{
        configuration, DisplayConfiguration, DisplayInfo, CONFIGURATION_HEADER,
        CONFIGURATION_SEED,
    };
    pub use csvbind_store::{
        CsvStore, FieldSet, Record, RowKey, StoreConfig, StoreError, WriteMode, WriteOutcome,
    };
}
