//! csvbind Codec
//!
//! Row-level translation between CSV text and typed records:
//! - Line tokenization honoring quote-enclosed delimiters
//! - Materialization of a record from a header and a data row
//! - Serialization of a record into a data line in header order

mod error;
mod materializer;
mod serializer;
mod tokenizer;

pub use error::{CodecError, CodecResult};
pub use materializer::{materialize, materialize_into};
pub use serializer::{header_line, quote_cell, serialize};
pub use tokenizer::{split_line, LineTokenizer};
