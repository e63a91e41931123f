//! Error types for article-portal.

use thiserror::Error;

/// Result type alias using article-portal's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for article-portal operations.
///
/// Relationship lookups that miss are not errors; they resolve to
/// placeholders inside the normalizer.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Server answered with a non-2xx status
    #[error("CMS returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body could not be decoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON that is not a usable compound document
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// JSON:API top-level `errors` member
    #[error("JSON:API error: {0}")]
    Api(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the failure happened before a response body was decoded.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Request(_) | Error::Status { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match e.classify() {
            // Valid JSON in the wrong shape
            Category::Data => Error::MalformedDocument(e.to_string()),
            Category::Io | Category::Syntax | Category::Eof => {
                Error::Serialization(e.to_string())
            }
        }
    }
}
