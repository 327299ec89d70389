//! Orchestrator error types.

use thiserror::Error;

/// Errors returned by [`crate::Orchestrator::process`].
///
/// Remote failures are not errors; they turn into a
/// [`crate::FallbackAdvisory`] on a successful outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Another classification is in flight. Nothing was queued.
    #[error("a classification is already in progress")]
    Busy,
}
