//! Record types used across the integration tests.

use csvbind_store::{FieldSet, Record};

/// Header written for [`DisplayConfiguration`].
pub const CONFIGURATION_HEADER: &str = "index,size_x,size_y,width,height";

/// Two displays keyed 0 and 1.
pub const CONFIGURATION_SEED: &str =
    "index,size_x,size_y,width,height\n0,2.5,2.9,1920,1080\n1,3.5,3.9,1921,1081\n";

/// Physical and pixel size of one display. `name` is never stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayConfiguration {
    pub name: String,
    pub index: i32,
    pub size_x: f32,
    pub size_y: f32,
    pub width: i32,
    pub height: i32,
}

impl Record for DisplayConfiguration {
    fn describe(fields: &mut FieldSet<Self>) {
        fields.field("name", |d| &d.name, |d| &mut d.name).ignore();
        fields.field("index", |d| &d.index, |d| &mut d.index);
        fields.field("size_x", |d| &d.size_x, |d| &mut d.size_x);
        fields.field("size_y", |d| &d.size_y, |d| &mut d.size_y);
        fields.field("width", |d| &d.width, |d| &mut d.width);
        fields.field("height", |d| &d.height, |d| &mut d.height);
    }
}

pub fn configuration(index: i32, size_x: f32, size_y: f32, width: i32, height: i32) -> DisplayConfiguration {
    DisplayConfiguration {
        name: String::new(),
        index,
        size_x,
        size_y,
        width,
        height,
    }
}

/// A named display; `name` is stored under the `display` column.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayInfo {
    pub name: String,
    pub index: u8,
    pub primary: bool,
    pub scale: f64,
}

impl Record for DisplayInfo {
    fn describe(fields: &mut FieldSet<Self>) {
        fields
            .field("name", |d| &d.name, |d| &mut d.name)
            .alias("display");
        fields.field("index", |d| &d.index, |d| &mut d.index);
        fields.field("primary", |d| &d.primary, |d| &mut d.primary);
        fields.field("scale", |d| &d.scale, |d| &mut d.scale);
    }
}
