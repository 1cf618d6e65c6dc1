//! # odsforge-ods
//!
//! OpenDocument spreadsheet writer for odsforge.
//!
//! Consumes the canonical [`Document`](odsforge_core::Document) tree and
//! emits a complete `.ods` container. Style names recorded during
//! normalization are resolved here, through the effective-style pass in
//! `odsforge_core::resolve`; only styles the document actually uses (plus
//! document-supplied definitions) land in `content.xml`.
//!
//! ## Example
//!
//! ```rust
//! use odsforge_core::{Cell, Document, Row, Tab};
//! use odsforge_ods::OdsWriter;
//! use std::io::Cursor;
//!
//! let mut document = Document::new();
//! let mut tab = Tab::new("Tab 1");
//! tab.rows.push(Row::from_cells(vec![Cell::new("hello")]));
//! document.tabs.push(tab);
//!
//! let mut buf = Vec::new();
//! OdsWriter::write(&document, Cursor::new(&mut buf)).unwrap();
//! assert!(!buf.is_empty());
//! ```

mod error;
mod styles;
mod writer;
mod xml;

pub use error::{OdsError, OdsResult};
pub use styles::{OdsStyleTable, ResolvedTab};
pub use writer::OdsWriter;
