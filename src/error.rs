//! Error types for the extraction library.
//!
//! The extractors themselves degrade gracefully on malformed or partial
//! input; only a response that cannot be read as a collection of blocks at
//! all surfaces as an error.

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or interpreting a block graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The analysis response is not a readable collection of blocks.
    #[error("Malformed block graph: {0}")]
    MalformedGraph(String),

    /// JSON (de)serialization error at the input or output boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
