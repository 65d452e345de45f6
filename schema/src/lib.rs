//! csvbind Schema
//!
//! Binds external CSV column names to typed record fields.
//!
//! A record type describes its fields once through [`Record::describe`]; the
//! [`Schema`] resolved from that description maps each column name (the
//! field's alias, or its own name) to the accessor pair that reads and writes
//! the field. Ignored fields never reach the schema.

mod builder;
mod error;
mod schema;
mod types;

pub use builder::FieldSet;
pub use error::{SchemaError, SchemaResult};
pub use schema::{FieldBinding, Schema};
pub use types::{FieldDef, Record};
