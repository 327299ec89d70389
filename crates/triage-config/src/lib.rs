//! # triage-config
//!
//! Layered configuration loading for triage using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TRIAGE_*` prefix, `__` as separator)
//! 2. Project-level `.triage/config.toml`
//! 3. User-level `~/.config/triage/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TRIAGE_REMOTE__BASE_URL` -> `remote.base_url`,
//! `TRIAGE_STORE__PATH` -> `store.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use triage_config::TriageConfig;
//!
//! let config = TriageConfig::load_with_dotenv().expect("config");
//!
//! if config.remote.is_configured() {
//!     println!("classify endpoint: {}", config.remote.classify_url());
//! }
//! ```

mod classifier;
mod error;
mod remote;
mod server;
mod store;

pub use classifier::ClassifierConfig;
pub use error::ConfigError;
pub use remote::RemoteConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every configuration key.
pub const ENV_PREFIX: &str = "TRIAGE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TriageConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl TriageConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".triage/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would only fail later at request time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.remote.enabled && !self.remote.base_url.is_empty() && !self.remote.has_valid_scheme()
        {
            return Err(ConfigError::InvalidValue {
                field: "remote.base_url".into(),
                reason: format!(
                    "'{}' must start with http:// or https://",
                    self.remote.base_url
                ),
            });
        }

        if self.server.host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".into(),
                reason: "must not be empty".into(),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("triage").join("config.toml"))
    }
}
