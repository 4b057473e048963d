//! Error types for the extractor.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Source document does not exist. Checked before any parsing starts.
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error while opening or reading the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed markup encountered during the streaming parse.
    #[error("XML parsing failed at byte {position}: {message}")]
    XmlParse { position: u64, message: String },

    /// Boundary marker that can never match a trimmed paragraph.
    #[error("Invalid section marker: '{0}'. Must be non-empty and must not start with whitespace")]
    InvalidMarker(String),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
