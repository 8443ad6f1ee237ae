//! Shared error types for the parascope pipeline.

use thiserror::Error;

/// Failures raised while fetching or decoding external lookup results.
///
/// Every variant is recovered at the session boundary: the session logs the
/// error and commits an empty result list instead of propagating it further.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Transport-level failure or a non-success HTTP status.
    #[error("lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON or did not match the expected
    /// `query.search` shape.
    #[error("unexpected lookup response shape: {0}")]
    Shape(String),

    /// The configured endpoint could not be parsed as a URL.
    #[error("invalid lookup endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Failures raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The document file could not be read. The previous session state is
    /// left untouched when this occurs.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// A selection referred to a segment index that does not exist.
    #[error("segment index {index} out of range (document has {len} segments)")]
    SelectionOutOfRange { index: usize, len: usize },
}
