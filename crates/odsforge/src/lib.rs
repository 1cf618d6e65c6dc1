//! # odsforge
//!
//! Generate OpenDocument spreadsheets from JSON or YAML table descriptions.
//!
//! A description can be minimalist (a list of lists of lists) or annotated,
//! with styles at any level:
//!
//! - a document is a list of tabs, or a map with a `body` key plus optional
//!   `styles` and `defaults`,
//! - a tab is a list of rows, or a map with a `table` key plus optional
//!   `name`, `style`, `width`, and `span`,
//! - a row is a list of cells, or a map with a `row` key plus optional
//!   `style`,
//! - a cell is a scalar, or a map with a `value` key plus optional `style`,
//!   `text`, `formula`, `colspanned`, and `rowspanned`.
//!
//! Styles named at a lower level win over the levels above; a built-in
//! catalog (`bold`, `grid_06pt`, `cell_decimal2`, ...) is always available
//! and custom ODF style fragments can be registered through the document's
//! `styles` list.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let raw = odsforge::ods_bytes(&json!([[["a", "b", "c"], [10, 20, 30]]])).unwrap();
//! assert!(!raw.is_empty());
//! ```
//!
//! Another example with more parameters:
//!
//! ```rust
//! use serde_json::json;
//!
//! let raw = odsforge::ods_bytes(&json!([
//!     {
//!         "name": "first tab",
//!         "style": "cell_decimal2",
//!         "table": [
//!             {
//!                 "row": ["a", "b", "c"],
//!                 "style": "bold_center_bg_gray_grid_06pt",
//!             },
//!             [10, 20, 30],
//!         ],
//!     }
//! ])).unwrap();
//! assert!(!raw.is_empty());
//! ```

pub mod prelude;

use std::fs;
use std::io::Cursor;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

// Re-export the core model
pub use odsforge_core::{
    Cell, CellAddress, CellRange, CellValue, DefaultBindings, Document, Row, SpanRequest,
    StyleDefinition, StyleFamily, StyleRegistry, Tab, BUILTIN_STYLES,
};

// Re-export normalization and writing
pub use odsforge_compose::{
    assemble_document, normalize_cell, normalize_row, normalize_tab, resolve_spans,
};
pub use odsforge_core::resolve;
pub use odsforge_core::Error as CoreError;
pub use odsforge_ods::{OdsError, OdsWriter};

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the conversion front-ends
#[derive(Debug, Error)]
pub enum Error {
    /// Normalization or style resolution failure
    #[error(transparent)]
    Core(#[from] odsforge_core::Error),

    /// Container writing failure
    #[error(transparent)]
    Ods(#[from] odsforge_ods::OdsError),

    /// IO error reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input text is neither valid JSON nor valid YAML
    #[error("input is not valid JSON or YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Convert a description into ODS bytes
///
/// This is the recommended front-end when odsforge is used as a library.
pub fn ods_bytes(content: &Value) -> Result<Vec<u8>> {
    let document = assemble_document(content)?;
    let mut buf = Vec::new();
    OdsWriter::write(&document, Cursor::new(&mut buf))?;
    Ok(buf)
}

/// Convert a description and save the resulting ODS to a file
pub fn content_to_ods<P: AsRef<Path>>(content: &Value, output: P) -> Result<()> {
    let document = assemble_document(content)?;
    OdsWriter::write_file(&document, output)?;
    Ok(())
}

/// Parse a JSON or YAML description text into a raw value
///
/// JSON is tried first for its more precise diagnostics; anything that is
/// not valid JSON goes through the YAML parser.
pub fn parse_description(text: &str) -> Result<Value> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(_) => Ok(serde_yaml::from_str(text)?),
    }
}

/// Parse an input file (JSON or YAML) and save the resulting ODS to a file
pub fn file_to_ods<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let text = fs::read_to_string(input)?;
    let content = parse_description(&text)?;
    content_to_ods(&content, output)
}
