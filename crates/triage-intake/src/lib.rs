//! # triage-intake
//!
//! The input normalizer: validates raw user input and turns it into a
//! [`Submission`].
//!
//! Accepted inputs are pasted text and uploaded files whose effective type is
//! `text/plain` or `application/pdf`. Files larger than
//! [`MAX_FILE_SIZE`] are rejected before any decoding. After decoding or
//! extraction the content is trimmed and must keep at least
//! [`triage_core::limits::MIN_TEXT_LENGTH`] characters.

mod error;
mod extract;

pub use error::IntakeError;
pub use extract::{decode_text, extract_pdf};

use std::path::Path;

use triage_core::limits::{ACCEPTED_MIME_TYPES, MAX_FILE_SIZE, MIME_PDF, format_file_size};
use triage_core::{Source, Submission, ValidationError};

/// Raw user input, before validation.
#[derive(Debug, Clone)]
pub enum RawInput {
    /// Text pasted by the user.
    Text(String),
    /// An uploaded document.
    File(FileUpload),
}

/// An uploaded document and its declared metadata.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// File name as shown to the user.
    pub name: String,
    /// Declared MIME type. When absent it is guessed from `name`.
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Read an upload from disk.
    ///
    /// The size limit is checked against file metadata before the content is
    /// read, so oversized files are never loaded into memory.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Io`] if the file cannot be read, or
    /// [`ValidationError::TooLarge`] if it exceeds [`MAX_FILE_SIZE`].
    pub async fn read(path: &Path, mime: Option<String>) -> Result<Self, IntakeError> {
        let io_error = |source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
        check_size(metadata.len())?;

        let bytes = tokio::fs::read(path).await.map_err(io_error)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        tracing::info!(file = %name, size = %format_file_size(metadata.len()), "file received");
        Ok(Self { name, mime, bytes })
    }

    /// The declared MIME type, or one guessed from the file extension.
    #[must_use]
    pub fn effective_mime(&self) -> String {
        self.mime.as_deref().map_or_else(
            || {
                mime_guess::from_path(&self.name)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string()
            },
            |declared| essence(declared).to_string(),
        )
    }
}

/// Validate raw input and build a [`Submission`].
///
/// Pure transform apart from logging. PDF extraction is CPU-bound; async
/// callers should run this on a blocking thread.
///
/// # Errors
///
/// Returns [`IntakeError::Validation`] for unsupported types, oversized files
/// and content that is too short after trimming, and
/// [`IntakeError::Extraction`] when a PDF cannot be read.
pub fn normalize(input: RawInput) -> Result<Submission, IntakeError> {
    match input {
        RawInput::Text(text) => Ok(Submission::new(&text, Source::Text, None)?),
        RawInput::File(upload) => {
            let mime = upload.effective_mime();
            if !ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
                return Err(ValidationError::UnsupportedType { mime }.into());
            }
            check_size(upload.bytes.len() as u64)?;

            let text = if mime == MIME_PDF {
                extract_pdf(&upload.bytes)?
            } else {
                decode_text(&upload.bytes)
            };

            Ok(Submission::new(&text, Source::File, Some(upload.name))?)
        }
    }
}

fn check_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge {
            size,
            max: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

/// Strip parameters such as `; charset=utf-8`.
fn essence(mime: &str) -> &str {
    mime.split(';').next().unwrap_or(mime).trim()
}
