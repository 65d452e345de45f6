//! Common error types for csvbind.

use thiserror::Error;

/// A cell's text could not be converted into the field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct CellError {
    /// Why the conversion failed, as reported by the underlying parser.
    pub reason: String,
}

impl CellError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Result type for cell conversions.
pub type CellResult<T> = Result<T, CellError>;
