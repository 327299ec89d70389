use triage_core::Category;

use crate::keywords::KeywordTable;
use crate::{Classification, Classifier};

/// Lower bound of the heuristic confidence.
pub const MIN_CONFIDENCE: f64 = 0.6;
/// Upper bound of the heuristic confidence.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Keyword-presence scorer used when the remote service is unavailable.
///
/// Matching is a plain substring test on the lower-cased content, so a keyword
/// also matches inside longer words (`agenda` in `agendar`).
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier {
    table: KeywordTable,
}

impl HeuristicClassifier {
    #[must_use]
    pub const fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &KeywordTable {
        &self.table
    }
}

impl Classifier for HeuristicClassifier {
    fn classify(&self, content: &str) -> Classification {
        let lowered = content.to_lowercase();
        let productive = matched(self.table.productive(), &lowered);
        let unproductive = matched(self.table.unproductive(), &lowered);

        // Ties, including 0-0, resolve to Unproductive.
        let (category, matched_keywords) = if productive.len() > unproductive.len() {
            (Category::Productive, productive)
        } else {
            (Category::Unproductive, unproductive)
        };

        Classification {
            category,
            confidence: confidence_for(matched_keywords.len()),
            matched_keywords,
        }
    }

    fn method(&self) -> &'static str {
        "keywords"
    }
}

fn matched(keywords: &[String], lowered: &str) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| lowered.contains(keyword.as_str()))
        .cloned()
        .collect()
}

/// `(winning_count + 2) / 5`, clamped to `[0.6, 0.95]`.
#[must_use]
pub fn confidence_for(winning_count: usize) -> f64 {
    let count = u32::try_from(winning_count).unwrap_or(u32::MAX);
    ((f64::from(count) + 2.0) / 5.0).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
