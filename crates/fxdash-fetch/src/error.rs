//! Fetch failure taxonomy.

use thiserror::Error;

/// Errors that can occur while talking to the rate API.
///
/// Any of these fails the whole batch it occurred in.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("Failed to fetch: {status} {reason}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Status text sent with the code.
        reason: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot form a valid request URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The configured API key cannot be sent as a header value.
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,
}

impl FetchError {
    /// Returns the HTTP status code if the server rejected the request.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
