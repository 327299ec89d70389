//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`crate::KeyValueStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be serialized or deserialized.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
