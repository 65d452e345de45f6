//! The Schema - ordered column name to field binding lookup.

use crate::{FieldDef, FieldSet, Record, SchemaError, SchemaResult};
use csvbind_core::{CellResult, ValueKind, DELIMITER, QUOTE};
use std::collections::HashMap;
use std::fmt;

/// A non-ignored field bound under its external column name.
pub struct FieldBinding<R> {
    column: String,
    def: FieldDef<R>,
}

impl<R> FieldBinding<R> {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn field_name(&self) -> &str {
        self.def.name()
    }

    pub fn kind(&self) -> ValueKind {
        self.def.kind()
    }

    pub fn type_name(&self) -> &'static str {
        self.def.type_name()
    }

    pub fn render(&self, record: &R) -> String {
        self.def.render(record)
    }

    pub fn assign(&self, record: &mut R, raw: &str) -> CellResult<()> {
        self.def.assign(record, raw)
    }
}

impl<R> fmt::Debug for FieldBinding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("column", &self.column)
            .field("field", &self.def.name())
            .field("kind", &self.def.kind())
            .finish()
    }
}

/// Ordered mapping from external column name to field binding for one
/// record type. Built anew for every operation; never cached.
pub struct Schema<R> {
    /// Bindings in declaration order.
    bindings: Vec<FieldBinding<R>>,
    /// Column name to position in `bindings`.
    index: HashMap<String, usize>,
}

impl<R: Record> Schema<R> {
    /// Resolve the schema of a record type.
    pub fn resolve() -> SchemaResult<Self> {
        Self::from_fields(FieldSet::describe())
    }
}

impl<R> Schema<R> {
    /// Resolve a schema from explicit field definitions.
    ///
    /// Ignored fields are skipped; every other field is bound under its alias
    /// if it has one, else its own name. Two fields resolving to the same
    /// column is a [`SchemaError::Conflict`].
    pub fn from_fields(fields: FieldSet<R>) -> SchemaResult<Self> {
        let mut bindings: Vec<FieldBinding<R>> = Vec::new();
        let mut index = HashMap::new();

        for def in fields.into_fields() {
            if def.is_ignored() {
                continue;
            }

            let column = def.column().to_string();
            validate_column(def.name(), &column)?;

            if let Some(&existing) = index.get(&column) {
                let first: &FieldBinding<R> = &bindings[existing];
                return Err(SchemaError::conflict(
                    column,
                    first.field_name(),
                    def.name(),
                ));
            }

            index.insert(column.clone(), bindings.len());
            bindings.push(FieldBinding { column, def });
        }

        Ok(Self { bindings, index })
    }

    /// Get the binding for a column.
    pub fn get(&self, column: &str) -> Option<&FieldBinding<R>> {
        self.index.get(column).map(|&i| &self.bindings[i])
    }

    /// Position of a column in declaration order.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.column())
    }

    pub fn bindings(&self) -> &[FieldBinding<R>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.bindings.iter()).finish()
    }
}

/// A column name must survive being written into, and split back out of, a header line.
fn validate_column(field: &str, column: &str) -> SchemaResult<()> {
    if column.is_empty() {
        return Err(SchemaError::invalid_column_name(
            field,
            column,
            "column name is empty",
        ));
    }
    if let Some(c) = column
        .chars()
        .find(|&c| c == DELIMITER || c == QUOTE || c == '\n' || c == '\r')
    {
        return Err(SchemaError::invalid_column_name(
            field,
            column,
            format!("column name contains {:?}", c),
        ));
    }
    Ok(())
}
