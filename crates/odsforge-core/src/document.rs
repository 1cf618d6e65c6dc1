//! Document record and default style bindings

use crate::cell::CellValue;
use crate::style::StyleRegistry;
use crate::tab::Tab;

/// Document-level fallback style names, consulted when no tab/row/cell level
/// style applies
///
/// The `str`/`int`/`float`/`other` bindings select a cell style by scalar
/// kind when the `cell` binding is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultBindings {
    /// Default row style
    pub row: String,
    /// Default cell style, overriding the per-kind bindings when non-empty
    pub cell: String,
    /// Default cell style for string and empty values
    pub string: String,
    /// Default cell style for integer values
    pub integer: String,
    /// Default cell style for float values
    pub float: String,
    /// Default cell style for any other value kind
    pub other: String,
}

impl Default for DefaultBindings {
    fn default() -> Self {
        Self {
            row: "default_table_row".into(),
            cell: String::new(),
            string: "left".into(),
            integer: "right".into(),
            float: "right".into(),
            other: "left".into(),
        }
    }
}

impl DefaultBindings {
    /// Update a binding by its description key; unknown keys are ignored
    pub fn set(&mut self, key: &str, name: &str) {
        match key {
            "style_table_row" => self.row = name.into(),
            "style_table_cell" => self.cell = name.into(),
            "style_str" => self.string = name.into(),
            "style_int" => self.integer = name.into(),
            "style_float" => self.float = name.into(),
            "style_other" => self.other = name.into(),
            _ => {}
        }
    }

    /// The per-kind fallback cell style for a value
    pub fn for_value(&self, value: &CellValue) -> &str {
        match value {
            CellValue::Empty | CellValue::String(_) => &self.string,
            CellValue::Integer(_) => &self.integer,
            CellValue::Float(_) => &self.float,
            CellValue::Boolean(_) => &self.other,
        }
    }
}

/// A fully normalized document, ready for span resolution and serialization
///
/// The document owns its registry copy and tabs exclusively; nothing is
/// shared across documents.
#[derive(Debug, Clone)]
pub struct Document {
    /// Tabs in input order
    pub tabs: Vec<Tab>,
    /// Document-scoped style registry (built-ins plus user definitions)
    pub registry: StyleRegistry,
    /// Default style bindings
    pub defaults: DefaultBindings,
    /// Names of document-supplied style definitions, in input order;
    /// the writer emits these even when unused
    pub user_styles: Vec<String>,
}

impl Document {
    /// Create an empty document over the built-in style catalog
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            registry: StyleRegistry::with_builtins(),
            defaults: DefaultBindings::default(),
            user_styles: Vec::new(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
