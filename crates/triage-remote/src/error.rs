//! Remote client error types.

use thiserror::Error;

/// Errors that can occur when calling the classification service.
///
/// Every variant is recoverable by the orchestrator, which falls back to the
/// local heuristic path.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP transport error, including connect failures and timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// The `error` field of the body, or the raw body.
        message: String,
    },

    /// The success body was not a classification result.
    #[error("parse error: {0}")]
    Parse(String),
}

impl RemoteError {
    /// Whether the request was abandoned because it exceeded the timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
