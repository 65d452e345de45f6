//! Store error types.

use std::fmt;
use std::path::{Path, PathBuf};

use csvbind_codec::CodecError;
use csvbind_schema::SchemaError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// How a single-row write identifies "the same logical row".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKey {
    /// A caller-supplied predicate over records.
    Predicate,
    /// Equality on one column's rendered value.
    Column { column: String, value: String },
}

impl RowKey {
    pub fn column(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Column {
            column: column.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Predicate => write!(f, "predicate"),
            RowKey::Column { column, value } => write!(f, "{} = {}", column, value),
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("CSV file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("CSV file {} has {lines} line(s); at least one data row is required", .path.display())]
    InsufficientData { path: PathBuf, lines: usize },

    #[error("Filter column '{column}' not found for {}", .path.display())]
    FilterColumnNotFound { column: String, path: PathBuf },

    #[error("Row matching {key} already exists at line {line} of {}; use update mode to change it", .path.display())]
    DuplicateKey {
        key: RowKey,
        line: usize,
        path: PathBuf,
    },

    #[error("No row matching {key} in {}; use append mode to add it", .path.display())]
    UpdateTargetMissing { key: RowKey, path: PathBuf },

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Line {line} of {}: {source}", .path.display())]
    Codec {
        path: PathBuf,
        line: usize,
        source: CodecError,
    },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn insufficient_data(path: impl AsRef<Path>, lines: usize) -> Self {
        Self::InsufficientData {
            path: path.as_ref().to_path_buf(),
            lines,
        }
    }

    pub fn filter_column_not_found(column: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::FilterColumnNotFound {
            column: column.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn duplicate_key(key: RowKey, line: usize, path: impl AsRef<Path>) -> Self {
        Self::DuplicateKey {
            key,
            line,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn update_target_missing(key: RowKey, path: impl AsRef<Path>) -> Self {
        Self::UpdateTargetMissing {
            key,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn codec(path: impl AsRef<Path>, line: usize, source: CodecError) -> Self {
        Self::Codec {
            path: path.as_ref().to_path_buf(),
            line,
            source,
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when the file exists but holds no data rows. Overwrite callers
    /// can treat this as "nothing to load".
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, StoreError::InsufficientData { .. })
    }
}
