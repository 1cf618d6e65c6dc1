//! # odsforge-core
//!
//! Core data structures for the odsforge spreadsheet generator.
//!
//! This crate provides the fundamental types used throughout odsforge:
//! - [`Document`], [`Tab`], [`Row`], [`Cell`] - the canonical document tree
//! - [`CellValue`] - scalar cell values (numbers, strings, booleans)
//! - [`StyleRegistry`] and [`StyleDefinition`] - named ODF style fragments
//! - [`CellAddress`], [`CellRange`], [`SpanRequest`] - merge-area addressing
//! - [`resolve`] - the effective-style resolution pass
//!
//! The tree is produced by the `odsforge-compose` crate from a raw JSON/YAML
//! value and consumed by the `odsforge-ods` writer. Style names recorded on
//! cells, rows, and tabs stay unresolved until serialization; [`resolve`]
//! computes the styles that actually apply, level by level.
//!
//! ## Example
//!
//! ```rust
//! use odsforge_core::{Cell, Row, StyleRegistry, Tab};
//!
//! let mut tab = Tab::new("Tab 1");
//! tab.rows.push(Row::from_cells(vec![Cell::new("a"), Cell::new(10i64)]));
//!
//! let registry = StyleRegistry::with_builtins();
//! assert!(registry.contains("bold"));
//! assert_eq!(tab.column_count(), 2);
//! ```

pub mod cell;
pub mod document;
pub mod error;
pub mod range;
pub mod resolve;
pub mod row;
pub mod span;
pub mod style;
pub mod tab;

// Re-exports for convenience
pub use cell::{Cell, CellValue};
pub use document::{DefaultBindings, Document};
pub use error::{Error, Result};
pub use range::{CellAddress, CellRange};
pub use row::Row;
pub use span::SpanRequest;
pub use style::{StyleDefinition, StyleFamily, StyleRegistry, BUILTIN_STYLES};
pub use tab::{Tab, DEFAULT_TAB_PREFIX};
