//! # triage-classify
//!
//! Local classification path: a swappable [`Classifier`] contract, the
//! keyword-based [`HeuristicClassifier`], and the response [`compose`]r that
//! turns a category into a suggested reply and a rationale.
//!
//! The orchestrator and the classification service depend only on the
//! [`Classifier`] trait, never on the heuristic implementation.

pub mod composer;
pub mod heuristic;
pub mod keywords;

pub use composer::{Composition, ReplyTemplate, compose};
pub use heuristic::{HeuristicClassifier, MAX_CONFIDENCE, MIN_CONFIDENCE, confidence_for};
pub use keywords::KeywordTable;

use triage_core::{Category, ClassificationResult};

/// Raw classifier verdict before a reply is composed.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub confidence: f64,
    /// Matched keywords of the winning category, in table order.
    pub matched_keywords: Vec<String>,
}

/// A deterministic content classifier.
pub trait Classifier: Send + Sync {
    /// Classify `content`. Must be pure: identical input, identical output.
    fn classify(&self, content: &str) -> Classification;

    /// Short method label reported as `classificationMethod`.
    fn method(&self) -> &'static str;
}

/// Classify `content` and compose the reply, producing a full result.
///
/// `processing_time` is left empty; callers that time the work fill it in.
#[must_use]
pub fn local_result(classifier: &dyn Classifier, content: &str) -> ClassificationResult {
    let verdict = classifier.classify(content);
    let composition = compose(verdict.category, content, &verdict.matched_keywords);

    tracing::debug!(
        category = %verdict.category,
        confidence = verdict.confidence,
        keywords = verdict.matched_keywords.len(),
        "local classification"
    );

    ClassificationResult {
        category: verdict.category,
        confidence: verdict.confidence,
        suggested_response: composition.suggested_response,
        reasoning: composition.reasoning,
        highlighted_keywords: verdict.matched_keywords,
        original_content: content.to_string(),
        processing_time: None,
        classification_method: Some(classifier.method().to_string()),
    }
}
