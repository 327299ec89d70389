use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use chrono::Utc;
use tokio::sync::watch;
use triage_classify::{Classifier, local_result};
use triage_core::{ClassificationResult, HistoryEntry, Submission};
use triage_history::{HistoryCache, KeyValueStore};
use triage_remote::ClassificationService;

use crate::error::PipelineError;
use crate::phase::Phase;

const REMOTE_DISABLED: &str = "remote classification is disabled";

/// Non-fatal signal that the result came from the local heuristic path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackAdvisory {
    /// Why the remote result was not used.
    pub reason: String,
}

/// A completed classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub result: ClassificationResult,
    /// Set when the remote path was skipped or failed.
    pub advisory: Option<FallbackAdvisory>,
    /// Id of the history entry recorded for this result.
    pub entry_id: i64,
}

impl Outcome {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.advisory.is_some()
    }
}

/// The classification orchestrator.
///
/// Runs one classification at a time: the remote service first when one is
/// configured, the local classifier when it is absent or fails. Every
/// completed classification is appended to the history cache before the
/// outcome is returned.
pub struct Orchestrator<R, S> {
    remote: Option<R>,
    classifier: Arc<dyn Classifier>,
    history: Mutex<HistoryCache<S>>,
    in_flight: tokio::sync::Mutex<()>,
    phase: watch::Sender<Phase>,
}

impl<R, S> Orchestrator<R, S>
where
    R: ClassificationService,
    S: KeyValueStore,
{
    /// Build an orchestrator. A `remote` of `None` forces the local path.
    pub fn new(
        remote: Option<R>,
        classifier: Arc<dyn Classifier>,
        history: HistoryCache<S>,
    ) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            remote,
            classifier,
            history: Mutex::new(history),
            in_flight: tokio::sync::Mutex::new(()),
            phase,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Watch phase transitions, e.g. to drive a loading indicator.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Lock the history cache. Do not hold the guard across an await.
    pub fn history(&self) -> MutexGuard<'_, HistoryCache<S>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Classify `submission` and record it in the history.
    ///
    /// Remote failures never surface as errors: the local classifier produces
    /// the result and the outcome carries a [`FallbackAdvisory`].
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Busy`] immediately if another call is in
    /// flight.
    pub async fn process(&self, submission: Submission) -> Result<Outcome, PipelineError> {
        let Ok(_token) = self.in_flight.try_lock() else {
            tracing::debug!("rejected concurrent classification");
            return Err(PipelineError::Busy);
        };

        let started = Instant::now();
        self.phase.send_replace(Phase::Submitting);

        let (result, advisory) = match &self.remote {
            Some(remote) => {
                self.phase.send_replace(Phase::Remote);
                match remote.classify(&submission).await {
                    Ok(result) => (complete_remote(result, &submission), None),
                    Err(error) => {
                        tracing::warn!(%error, "remote classification failed; using heuristic");
                        let reason = error.to_string();
                        (self.fallback(&submission, started), Some(FallbackAdvisory { reason }))
                    }
                }
            }
            None => {
                let advisory = FallbackAdvisory {
                    reason: REMOTE_DISABLED.to_string(),
                };
                (self.fallback(&submission, started), Some(advisory))
            }
        };

        let entry_id = self.record(&submission, &result);
        self.phase.send_replace(Phase::Done);

        tracing::info!(
            category = %result.category,
            confidence = result.confidence,
            elapsed_secs = started.elapsed().as_secs_f64(),
            method = result.classification_method.as_deref().unwrap_or("remote"),
            fallback = advisory.is_some(),
            "classification complete"
        );

        Ok(Outcome {
            result,
            advisory,
            entry_id,
        })
    }

    fn fallback(&self, submission: &Submission, started: Instant) -> ClassificationResult {
        self.phase.send_replace(Phase::Fallback);
        let mut result = local_result(self.classifier.as_ref(), submission.content());
        result.processing_time = Some(started.elapsed().as_secs_f64());
        result
    }

    fn record(&self, submission: &Submission, result: &ClassificationResult) -> i64 {
        let mut history = self.history();
        let now = Utc::now();
        let id = next_id(now.timestamp_millis(), history.latest_id());
        history.append(HistoryEntry::record(id, now, submission, result));
        id
    }
}

/// Remote results are trusted as-is apart from a missing `originalContent`.
fn complete_remote(mut result: ClassificationResult, submission: &Submission) -> ClassificationResult {
    if result.original_content.is_empty() {
        result.original_content = submission.content().to_string();
    }
    result
}

/// Creation-time id, bumped past `latest` when the clock has not advanced.
fn next_id(now_ms: i64, latest: Option<i64>) -> i64 {
    match latest {
        Some(latest) if latest >= now_ms => latest + 1,
        _ => now_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_uses_clock_when_it_advanced() {
        assert_eq!(next_id(1_000, None), 1_000);
        assert_eq!(next_id(1_000, Some(999)), 1_000);
    }

    #[test]
    fn next_id_bumps_on_collision_or_skew() {
        assert_eq!(next_id(1_000, Some(1_000)), 1_001);
        assert_eq!(next_id(1_000, Some(5_000)), 5_001);
    }

    #[test]
    fn phase_busy_states() {
        assert!(!Phase::Idle.is_busy());
        assert!(Phase::Remote.is_busy());
        assert!(!Phase::Done.is_busy());
    }
}
