//! # triage-remote
//!
//! HTTP client for the remote classification service.
//!
//! The service exposes `POST {classify_path}` taking a [`Submission`] body and
//! answering with a [`ClassificationResult`], plus `GET {health_path}` for
//! reachability probes. Every failure surfaces as a [`RemoteError`]; deciding
//! what to do about it is the orchestrator's job.

mod error;
mod http;

pub use error::RemoteError;

use std::future::Future;
use std::time::Duration;

use triage_config::RemoteConfig;
use triage_core::responses::HealthReport;
use triage_core::{ClassificationResult, Submission};

use crate::http::check_response;

const USER_AGENT: &str = concat!("triage/", env!("CARGO_PKG_VERSION"));

/// A service able to classify a submission.
///
/// Implemented by [`RemoteClient`]; tests substitute scripted services.
pub trait ClassificationService: Send + Sync {
    /// Classify one submission.
    fn classify(
        &self,
        submission: &Submission,
    ) -> impl Future<Output = Result<ClassificationResult, RemoteError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one classification service.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    classify_url: String,
    health_url: String,
}

impl RemoteClient {
    /// Create a client for the service described by `config`.
    ///
    /// A `timeout_secs` of zero leaves requests unbounded.
    #[must_use]
    pub fn new(config: &RemoteConfig) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!(%e, "failed to build HTTP client, using defaults");
            reqwest::Client::new()
        });

        Self {
            http,
            classify_url: config.classify_url(),
            health_url: config.health_url(),
        }
    }

    #[must_use]
    pub fn classify_url(&self) -> &str {
        &self.classify_url
    }

    #[must_use]
    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    /// Send a submission to the classify endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the request fails or times out, the service
    /// returns a non-success status, or the body is not a classification
    /// result.
    pub async fn classify(
        &self,
        submission: &Submission,
    ) -> Result<ClassificationResult, RemoteError> {
        tracing::debug!(url = %self.classify_url, "sending submission to remote classifier");

        let resp = self
            .http
            .post(&self.classify_url)
            .json(submission)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body = resp.text().await?;

        serde_json::from_str(&body).map_err(|e| RemoteError::Parse(e.to_string()))
    }

    /// Probe the health endpoint.
    ///
    /// Any HTTP response, whatever its status, counts as reachable. Only
    /// transport failures report the service as unreachable.
    pub async fn health(&self) -> HealthReport {
        match self.http.get(&self.health_url).send().await {
            Ok(resp) => HealthReport {
                url: self.health_url.clone(),
                reachable: true,
                status: Some(resp.status().as_u16()),
            },
            Err(e) => {
                tracing::debug!(url = %self.health_url, %e, "health probe failed");
                HealthReport {
                    url: self.health_url.clone(),
                    reachable: false,
                    status: None,
                }
            }
        }
    }
}

impl ClassificationService for RemoteClient {
    fn classify(
        &self,
        submission: &Submission,
    ) -> impl Future<Output = Result<ClassificationResult, RemoteError>> + Send {
        Self::classify(self, submission)
    }
}
