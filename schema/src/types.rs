//! Record contract and field definitions.

use crate::FieldSet;
use csvbind_core::{Cell, CellResult, ValueKind};
use std::fmt;

/// A flat, default-constructible record type that can be bound to CSV rows.
///
/// Implementors list their fields once; the engine never inspects the type
/// beyond that list.
///
/// ```ignore
/// impl Record for Display {
///     fn describe(fields: &mut FieldSet<Self>) {
///         fields.field("name", |d| &d.name, |d| &mut d.name).alias("display");
///         fields.field("width", |d| &d.width, |d| &mut d.width);
///         fields.field("cache", |d| &d.cache, |d| &mut d.cache).ignore();
///     }
/// }
/// ```
pub trait Record: Default + 'static {
    /// Declare the record's fields, in column order for freshly written files.
    fn describe(fields: &mut FieldSet<Self>);
}

type RenderFn<R> = Box<dyn Fn(&R) -> String>;
type AssignFn<R> = Box<dyn Fn(&mut R, &str) -> CellResult<()>>;

/// One field of a record type: its name, value kind, CSV visibility and
/// the accessor pair used to read and write it.
pub struct FieldDef<R> {
    /// Field name.
    name: String,
    /// External column name, if it differs from the field name.
    alias: Option<String>,
    /// Whether this field is excluded from CSV I/O.
    ignored: bool,
    /// Value kind of the field's type.
    kind: ValueKind,
    /// Rust type name of the field.
    type_name: &'static str,
    render: RenderFn<R>,
    assign: AssignFn<R>,
}

impl<R: 'static> FieldDef<R> {
    pub fn new<T: Cell + 'static>(
        name: impl Into<String>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        Self {
            name: name.into(),
            alias: None,
            ignored: false,
            kind: T::KIND,
            type_name: T::TYPE_NAME,
            render: Box::new(move |record| get(record).render_cell()),
            assign: Box::new(move |record, raw| {
                *get_mut(record) = T::parse_cell(raw)?;
                Ok(())
            }),
        }
    }
}

impl<R> FieldDef<R> {
    /// Read and write this field under `column` instead of its own name.
    pub fn alias(&mut self, column: impl Into<String>) -> &mut Self {
        self.alias = Some(column.into());
        self
    }

    /// Exclude this field from CSV I/O entirely.
    pub fn ignore(&mut self) -> &mut Self {
        self.ignored = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// The external column name: the alias if declared, else the field name.
    pub fn column(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Render the field's current value as unquoted cell text.
    pub fn render(&self, record: &R) -> String {
        (self.render)(record)
    }

    /// Parse `raw` and assign it to the field. The field is left untouched on error.
    pub fn assign(&self, record: &mut R, raw: &str) -> CellResult<()> {
        (self.assign)(record, raw)
    }
}

impl<R> fmt::Debug for FieldDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("ignored", &self.ignored)
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
