//! Intake error types.

use std::path::PathBuf;

use thiserror::Error;
use triage_core::ValidationError;

/// Errors raised while turning raw input into a submission.
///
/// Every variant aborts before orchestration; none is retried.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Unsupported type, oversized input, or content too short.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Text could not be extracted from a document.
    #[error("failed to extract text from PDF: {reason}")]
    Extraction { reason: String },

    /// The file could not be read from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IntakeError {
    /// Whether this is a validation failure rather than an extraction/IO one.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
