//! ODS error types

use thiserror::Error;

/// Result type for ODS writing
pub type OdsResult<T> = std::result::Result<T, OdsError>;

/// Errors that can occur while writing an ODS container
#[derive(Debug, Error)]
pub enum OdsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Core error (style resolution, bad document)
    #[error("Core error: {0}")]
    Core(#[from] odsforge_core::Error),
}
