//! Server error types.

use thiserror::Error;

/// Errors that stop the classification service.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
