//! Error types for page-capture.
//!
//! Extraction itself degrades gracefully; the variants here cover the few
//! caller-level preconditions that cannot be recovered from.

/// Error type for extraction and packaging operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document has no usable content root (no selector match and no `<body>`).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configured content selector uses syntax outside the supported subset.
    #[error("Unsupported content selector: {0}")]
    InvalidSelector(String),

    /// A capture payload was requested for a result without any text.
    #[error("No extractable content found")]
    NoContent,

    /// The capture envelope could not be encoded.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for page-capture operations.
pub type Result<T> = std::result::Result<T, Error>;
