//! # triage-pipeline
//!
//! The classification orchestrator.
//!
//! [`Orchestrator::process`] takes an already validated
//! [`triage_core::Submission`], tries the remote
//! [`triage_remote::ClassificationService`], falls back to the local
//! [`triage_classify::Classifier`] on any remote failure, appends the result to
//! the [`triage_history::HistoryCache`], and returns it. Calls are
//! single-flight: a call made while another is running is rejected with
//! [`PipelineError::Busy`].

mod error;
mod orchestrator;
mod phase;

pub use error::PipelineError;
pub use orchestrator::{FallbackAdvisory, Orchestrator, Outcome};
pub use phase::Phase;
