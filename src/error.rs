//! Error types for mock setup and endpoint generation.

use thiserror::Error;

/// Errors that can occur while configuring a mock backend or generating
/// the endpoint catalog.
///
/// Misuse of a running mock (draining a FIFO, asking for a page that does
/// not exist) is not reported through this type; see
/// [`UsageViolation`](crate::UsageViolation).
#[derive(Debug, Error)]
pub enum MockError {
    /// A canned response could not be serialized, or a JSON document could not be parsed.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Binding or serving the mock server failed, or a file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Query string could not be decoded into the requested type.
    #[error("Invalid query string: {0}")]
    Query(#[from] serde_qs::Error),

    /// The API definition did not have the expected shape.
    #[error("Invalid API definition: {0}")]
    Schema(String),
}

/// Result type alias for ghmock operations.
pub type Result<T> = core::result::Result<T, MockError>;
