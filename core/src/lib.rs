//! csvbind Core Types
//!
//! This crate provides the foundational types used throughout csvbind:
//! - Format constants (delimiter, quote)
//! - Value kinds (the closed set of cell types a record field may have)
//! - The `Cell` trait: typed parse/render functions for each supported field type
//! - Common error types

mod error;
mod format;
mod value;

pub use error::*;
pub use format::*;
pub use value::*;
