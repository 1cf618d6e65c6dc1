//! Error types for odsforge-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while normalizing a description or resolving styles
#[derive(Debug, Error)]
pub enum Error {
    /// Input value at some grammar level is not a recognized shape
    #[error("Invalid document shape: {0}")]
    InvalidDocumentShape(String),

    /// Mandatory key absent from an annotated map
    #[error("Missing mandatory field '{field}' in {context}")]
    MissingField {
        /// Grammar level the map belongs to ("cell", "row", ...)
        context: &'static str,
        /// The absent key
        field: &'static str,
    },

    /// Style name not registered at resolution time
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// Mixed style families where a single family is required
    #[error("Style family conflict: {0}")]
    StyleConflict(String),

    /// Non-positive or malformed span directive
    #[error("Invalid span: {0}")]
    InvalidSpan(String),

    /// Resolved span exceeds the tab dimensions
    #[error("Span {span} out of bounds for tab '{tab}' ({rows} rows x {cols} columns)")]
    SpanOutOfBounds {
        /// The offending span, in A1 notation
        span: String,
        /// Tab name
        tab: String,
        /// Row count of the tab
        rows: usize,
        /// Maximum cell count across the tab's rows
        cols: usize,
    },
}

impl Error {
    /// Create an [`Error::InvalidDocumentShape`] with a message
    pub fn shape<S: Into<String>>(msg: S) -> Self {
        Error::InvalidDocumentShape(msg.into())
    }

    /// Create an [`Error::MissingField`] for the given context/key pair
    pub fn missing(context: &'static str, field: &'static str) -> Self {
        Error::MissingField { context, field }
    }
}
