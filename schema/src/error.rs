//! Schema error types.

use thiserror::Error;

/// Result type for schema resolution.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while resolving a record type into a schema.
///
/// These are configuration errors in the record description, not data errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Column '{column}' is bound by both field '{first}' and field '{second}'")]
    Conflict {
        column: String,
        first: String,
        second: String,
    },

    #[error("Invalid column name '{column}' for field '{field}': {reason}")]
    InvalidColumnName {
        field: String,
        column: String,
        reason: String,
    },
}

impl SchemaError {
    pub fn conflict(
        column: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            column: column.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn invalid_column_name(
        field: impl Into<String>,
        column: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidColumnName {
            field: field.into(),
            column: column.into(),
            reason: reason.into(),
        }
    }
}
