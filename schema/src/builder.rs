//! FieldSet for describing a record type's fields.

use crate::{FieldDef, Record};
use csvbind_core::Cell;

/// Builder collecting the field definitions of one record type.
#[derive(Debug)]
pub struct FieldSet<R> {
    /// Fields in declaration order.
    fields: Vec<FieldDef<R>>,
}

impl<R> Default for FieldSet<R> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<R: 'static> FieldSet<R> {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field bound through a getter/setter pair.
    pub fn field<T: Cell + 'static>(
        &mut self,
        name: impl Into<String>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> &mut FieldDef<R> {
        self.fields.push(FieldDef::new(name, get, get_mut));
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }
}

impl<R: Record> FieldSet<R> {
    /// Collect the fields a record type declares.
    pub fn describe() -> Self {
        let mut fields = Self::new();
        R::describe(&mut fields);
        fields
    }
}

impl<R> FieldSet<R> {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all declared fields, ignored ones included.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDef<R>> {
        self.fields.iter()
    }

    pub fn into_fields(self) -> Vec<FieldDef<R>> {
        self.fields
    }
}
