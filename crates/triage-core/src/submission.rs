use serde::Serialize;

use crate::enums::Source;
use crate::errors::ValidationError;
use crate::limits::MIN_TEXT_LENGTH;

/// Normalized email content ready for classification.
///
/// The only constructor trims the content and enforces [`MIN_TEXT_LENGTH`],
/// so every `Submission` that exists is classifiable. Serializes to the
/// `{content, source, filename?}` body expected by the classify endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    content: String,
    source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
}

impl Submission {
    /// Build a submission from raw (untrimmed) content.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooShort`] when the trimmed content has fewer
    /// than [`MIN_TEXT_LENGTH`] characters.
    pub fn new(
        raw: &str,
        source: Source,
        filename: Option<String>,
    ) -> Result<Self, ValidationError> {
        let content = raw.trim();
        let length = content.chars().count();
        if length < MIN_TEXT_LENGTH {
            return Err(ValidationError::TooShort {
                length,
                min: MIN_TEXT_LENGTH,
            });
        }

        Ok(Self {
            content: content.to_string(),
            source,
            filename,
        })
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn source(&self) -> Source {
        self.source
    }

    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn trims_content() {
        let submission = Submission::new("   Reunião amanhã às 10h  \n", Source::Text, None).unwrap();
        assert_eq!(submission.content(), "Reunião amanhã às 10h");
    }

    #[test]
    fn rejects_short_content_after_trimming() {
        let err = Submission::new("   curto    ", Source::Text, None).unwrap_err();
        assert_eq!(err, ValidationError::TooShort { length: 5, min: 10 });
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 10 characters, 20 bytes.
        assert!(Submission::new("ãéíõúãéíõú", Source::Text, None).is_ok());
        // 9 characters, 18 bytes.
        assert!(Submission::new("ãéíõúãéíõ", Source::Text, None).is_err());
    }

    #[test]
    fn serializes_request_body() {
        let text = Submission::new("Relatório mensal anexo", Source::Text, None).unwrap();
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            serde_json::json!({"content": "Relatório mensal anexo", "source": "text"})
        );

        let file = Submission::new(
            "Relatório mensal anexo",
            Source::File,
            Some("relatorio.txt".into()),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&file).unwrap(),
            serde_json::json!({
                "content": "Relatório mensal anexo",
                "source": "file",
                "filename": "relatorio.txt"
            })
        );
    }
}
