//! Validation errors raised before content may enter the pipeline.
//!
//! Extraction failures are owned by `triage-intake`; remote and persistence
//! failures are owned by their respective crates and never surface here.

use thiserror::Error;

use crate::limits::format_file_size;

/// Input rejected by the normalizer. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The effective MIME type is neither plain text nor PDF.
    #[error("unsupported file type '{mime}': only .txt or .pdf files are accepted")]
    UnsupportedType { mime: String },

    /// The raw input exceeds the maximum accepted size.
    #[error("file too large ({}): maximum size is {}", human_size(.size), human_size(.max))]
    TooLarge { size: u64, max: u64 },

    /// Trimmed content is shorter than the minimum classifiable length.
    #[error("content too short for classification ({length} characters, minimum {min})")]
    TooShort { length: usize, min: usize },
}

fn human_size(bytes: &u64) -> String {
    format_file_size(*bytes)
}
