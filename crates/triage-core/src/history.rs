use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Source};
use crate::result::ClassificationResult;
use crate::submission::Submission;

/// A completed classification as retained by the history cache.
///
/// `id` is the creation time in Unix milliseconds. Entries are never mutated;
/// they are only dropped by truncation or a full clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub content: String,
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub category: Category,
    pub confidence: f64,
    pub suggested_response: String,
    pub reasoning: String,
}

impl HistoryEntry {
    /// Derive an entry from the submission that was classified and its result.
    #[must_use]
    pub fn record(
        id: i64,
        timestamp: DateTime<Utc>,
        submission: &Submission,
        result: &ClassificationResult,
    ) -> Self {
        Self {
            id,
            timestamp,
            content: submission.content().to_string(),
            source: submission.source(),
            filename: submission.filename().map(str::to_string),
            category: result.category,
            confidence: result.confidence,
            suggested_response: result.suggested_response.clone(),
            reasoning: result.reasoning.clone(),
        }
    }

    /// Rebuild a displayable result from the stored fields.
    ///
    /// Keywords and timings are not retained, so they come back empty.
    #[must_use]
    pub fn to_result(&self) -> ClassificationResult {
        ClassificationResult {
            category: self.category,
            confidence: self.confidence,
            suggested_response: self.suggested_response.clone(),
            reasoning: self.reasoning.clone(),
            highlighted_keywords: Vec::new(),
            original_content: self.content.clone(),
            processing_time: None,
            classification_method: None,
        }
    }

    /// First 100 characters of the content, with `...` when truncated.
    #[must_use]
    pub fn preview(&self) -> String {
        const PREVIEW_CHARS: usize = 100;

        if self.content.chars().count() > PREVIEW_CHARS {
            let head: String = self.content.chars().take(PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            self.content.clone()
        }
    }
}
