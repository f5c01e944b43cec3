//! Error types for the generation backend client

use thiserror::Error;

/// Errors that can occur talking to the generation backend.
///
/// These never escape the client's public surface: callers receive a
/// fallback story or "no image" instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Backend returned an error response
    #[error("backend error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the backend
        message: String,
    },

    /// Response body could not be decoded
    #[error("malformed backend response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
