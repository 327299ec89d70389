//! Remote classification service configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("http://127.0.0.1:8000")
}

fn default_classify_path() -> String {
    String::from("/classify")
}

fn default_health_path() -> String {
    String::from("/health")
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Base URL of the classification service (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the classify endpoint, relative to `base_url`.
    #[serde(default = "default_classify_path")]
    pub classify_path: String,

    /// Path of the health endpoint, relative to `base_url`.
    #[serde(default = "default_health_path")]
    pub health_path: String,

    /// Per-request timeout. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// When false, every classification takes the local heuristic path.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            classify_path: default_classify_path(),
            health_path: default_health_path(),
            timeout_secs: default_timeout_secs(),
            enabled: default_enabled(),
        }
    }
}

impl RemoteConfig {
    /// Remote calls are attempted only when enabled with a base URL.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.base_url.is_empty()
    }

    /// Whether `base_url` carries an HTTP(S) scheme.
    #[must_use]
    pub fn has_valid_scheme(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }

    /// Full URL of the classify endpoint.
    #[must_use]
    pub fn classify_url(&self) -> String {
        join_url(&self.base_url, &self.classify_path)
    }

    /// Full URL of the health endpoint.
    #[must_use]
    pub fn health_url(&self) -> String {
        join_url(&self.base_url, &self.health_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
