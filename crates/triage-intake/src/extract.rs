//! Text extraction for accepted document formats.

use crate::error::IntakeError;

/// Extract page-ordered text from PDF bytes.
///
/// Fragments within a page are joined with single spaces; pages are joined
/// with newlines.
///
/// # Errors
///
/// Returns [`IntakeError::Extraction`] if the document cannot be parsed.
pub fn extract_pdf(data: &[u8]) -> Result<String, IntakeError> {
    // pdf-extract panics on some malformed documents.
    let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(data))
        .map_err(|_| IntakeError::Extraction {
            reason: "document structure could not be parsed".to_string(),
        })?
        .map_err(|e| IntakeError::Extraction {
            reason: e.to_string(),
        })?;

    tracing::debug!(pages = pages.len(), "extracted PDF text");
    Ok(join_pages(&pages))
}

/// Decode plain-text bytes, replacing invalid UTF-8 sequences.
#[must_use]
pub fn decode_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn joins_fragments_with_spaces_and_pages_with_newlines() {
        let pages = vec![
            "Assunto:\n  Reunião\tde   projeto".to_string(),
            "Prazo:  sexta-feira\n".to_string(),
        ];
        assert_eq!(
            join_pages(&pages),
            "Assunto: Reunião de projeto\nPrazo: sexta-feira"
        );
    }

    #[test]
    fn empty_pages_keep_their_position() {
        let pages = vec!["primeira".to_string(), "   ".to_string(), "terceira".to_string()];
        assert_eq!(join_pages(&pages), "primeira\n\nterceira");
    }

    #[test]
    fn garbage_bytes_fail_extraction() {
        let err = extract_pdf(b"definitely not a pdf document").unwrap_err();
        assert!(matches!(err, IntakeError::Extraction { .. }));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let decoded = decode_text(b"Relat\xF3rio anexo");
        assert_eq!(decoded, "Relat\u{FFFD}rio anexo");
    }
}
