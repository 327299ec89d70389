use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// Classification outcome handed back to the caller.
///
/// Produced either by the remote service (trusted as-is) or by the local
/// heuristic classifier and response composer. Field names follow the
/// camelCase JSON contract of the classify endpoint; the optional fields may
/// be absent in remote responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    /// Heuristic score in `[0.6, 0.95]` on the local path. Not a probability.
    pub confidence: f64,
    pub suggested_response: String,
    pub reasoning: String,
    #[serde(default)]
    pub highlighted_keywords: Vec<String>,
    #[serde(default)]
    pub original_content: String,
    /// Wall-clock seconds spent producing the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    /// Which classifier produced the result (e.g. `keywords`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_method: Option<String>,
}

impl ClassificationResult {
    /// Confidence as a whole percentage, as shown to users.
    #[must_use]
    pub fn confidence_percent(&self) -> u32 {
        let clamped = self.confidence.clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (clamped * 100.0).round() as u32;
        percent
    }
}
