//! Codec error types.

use csvbind_core::{CellError, ValueKind};
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while materializing a record from a row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error(
        "Cannot convert value '{value}' in column '{column}' to {type_name} ({kind}): {source}"
    )]
    FieldConversion {
        column: String,
        value: String,
        kind: ValueKind,
        type_name: &'static str,
        source: CellError,
    },

    #[error("Row has {len} cells but column '{column}' is at position {index}")]
    MissingCell {
        column: String,
        index: usize,
        len: usize,
    },
}

impl CodecError {
    pub fn field_conversion(
        column: impl Into<String>,
        value: impl Into<String>,
        kind: ValueKind,
        type_name: &'static str,
        source: CellError,
    ) -> Self {
        Self::FieldConversion {
            column: column.into(),
            value: value.into(),
            kind,
            type_name,
            source,
        }
    }

    pub fn missing_cell(column: impl Into<String>, index: usize, len: usize) -> Self {
        Self::MissingCell {
            column: column.into(),
            index,
            len,
        }
    }
}
