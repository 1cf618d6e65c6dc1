//! Convenience re-exports for common usage

pub use crate::{
    assemble_document, content_to_ods, file_to_ods, ods_bytes, parse_description, Cell,
    CellAddress, CellRange, CellValue, CoreError, DefaultBindings, Document, Error, OdsWriter,
    Result, Row, SpanRequest, StyleDefinition, StyleFamily, StyleRegistry, Tab,
};
