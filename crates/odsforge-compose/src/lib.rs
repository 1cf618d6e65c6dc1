//! # odsforge-compose
//!
//! The normalization engine of odsforge: turns a raw, loosely-typed
//! description (an already-deserialized JSON/YAML value) into the canonical
//! [`Document`](odsforge_core::Document) tree.
//!
//! Every grammar level tolerates two shapes, a bare sequence and an
//! annotated map:
//!
//! - document: `[tab, ...]` or `{"body": [...], "styles": [...], "defaults": {...}}`
//! - tab: `[row, ...]` or `{"table": [...], "name": ..., "style": ..., "width": ..., "span": ...}`
//! - row: `[cell, ...]` or `{"row": [...], "style": ...}`
//! - cell: a scalar or `{"value": ..., "style": ..., "text": ..., "formula": ...,
//!   "colspanned": ..., "rowspanned": ...}`
//!
//! Shape detection is explicit: unrecognized shapes fail with a typed error
//! instead of being misread. Style names are recorded but not resolved here;
//! resolution happens in `odsforge_core::resolve` when the document is
//! serialized. The first error encountered aborts the whole conversion.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let document = odsforge_compose::assemble_document(
//!     &json!([[["a", "b", "c"], [10, 20, 30]]]),
//! ).unwrap();
//! assert_eq!(document.tabs[0].name, "Tab 1");
//! ```

pub mod cell;
pub mod document;
pub mod row;
mod shape;
pub mod span;
pub mod tab;

pub use cell::normalize_cell;
pub use document::assemble_document;
pub use row::normalize_row;
pub use span::resolve_spans;
pub use tab::normalize_tab;
