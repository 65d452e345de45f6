//! Value kinds and cell conversion.
//!
//! A record field participates in CSV I/O only if its type is one of a small
//! closed set: integers, floating point numbers, booleans and strings. Each
//! supported Rust type implements [`Cell`], which pairs a parser (cell text to
//! value) with a renderer (value to cell text).

use crate::{CellError, CellResult};
use std::fmt;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Signed or unsigned integer of any width.
    Int,
    /// 32- or 64-bit floating point.
    Float,
    /// `true` / `false`.
    Bool,
    /// UTF-8 text, passed through unchanged.
    String,
}

impl ValueKind {
    /// Returns true for the two numeric kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Float)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "boolean",
            ValueKind::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field type that can be read from and written to a CSV cell.
pub trait Cell: Sized {
    /// The value kind this type belongs to.
    const KIND: ValueKind;

    /// The Rust type name, used in conversion errors.
    const TYPE_NAME: &'static str;

    /// Parse cell text into a value.
    fn parse_cell(raw: &str) -> CellResult<Self>;

    /// Render a value as cell text (unquoted).
    fn render_cell(&self) -> String;
}

macro_rules! impl_cell_from_str {
    ($kind:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Cell for $t {
                const KIND: ValueKind = $kind;
                const TYPE_NAME: &'static str = stringify!($t);

                fn parse_cell(raw: &str) -> CellResult<Self> {
                    raw.parse::<$t>().map_err(|e| CellError::new(e.to_string()))
                }

                fn render_cell(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_cell_from_str!(ValueKind::Int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_cell_from_str!(ValueKind::Float => f32, f64);

// `bool::from_str` only accepts the exact lowercase literals.
impl_cell_from_str!(ValueKind::Bool => bool);

impl Cell for String {
    const KIND: ValueKind = ValueKind::String;
    const TYPE_NAME: &'static str = "String";

    fn parse_cell(raw: &str) -> CellResult<Self> {
        Ok(raw.to_string())
    }

    fn render_cell(&self) -> String {
        self.clone()
    }
}
