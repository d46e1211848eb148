//! Client error types.

use thiserror::Error;

/// Errors that can occur when calling the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Raw response body, not parsed.
        body: String,
    },

    /// A success response body was not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}
