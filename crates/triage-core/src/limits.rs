//! Input and retention limits surfaced to every collaborator.

/// Minimum trimmed length (in characters) of classifiable content.
pub const MIN_TEXT_LENGTH: usize = 10;

/// Maximum accepted size of an uploaded document, in bytes (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Number of classifications retained by the history cache.
pub const MAX_HISTORY_ITEMS: usize = 10;

/// Store key holding the serialized history list.
pub const HISTORY_KEY: &str = "email-classifier-history";

/// Store key holding the theme preference token.
pub const THEME_KEY: &str = "email-classifier-theme";

/// MIME types accepted for file submissions.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[MIME_TEXT_PLAIN, MIME_PDF];

pub const MIME_TEXT_PLAIN: &str = "text/plain";
pub const MIME_PDF: &str = "application/pdf";

/// Format a byte count with 1024-based units, e.g. `10 MB` or `1.5 KB`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return String::from("0 Bytes");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0 Bytes")]
    #[case(512, "512 Bytes")]
    #[case(1536, "1.5 KB")]
    #[case(MAX_FILE_SIZE, "10 MB")]
    #[case(1_234_567, "1.18 MB")]
    fn formats_sizes(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(format_file_size(bytes), expected);
    }

    #[test]
    fn accepted_types_are_text_and_pdf() {
        assert_eq!(ACCEPTED_MIME_TYPES, &["text/plain", "application/pdf"]);
    }
}
