//! Local key-value store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the JSON store file. Empty selects the platform default.
    #[serde(default)]
    pub path: String,
}

impl StoreConfig {
    /// Resolve the store file path.
    ///
    /// Falls back to `<data_local_dir>/triage/store.json`, then to
    /// `.triage/store.json` in the working directory when no platform data
    /// directory is known.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if !self.path.is_empty() {
            return PathBuf::from(&self.path);
        }

        dirs::data_local_dir().map_or_else(
            || PathBuf::from(".triage").join("store.json"),
            |dir| dir.join("triage").join("store.json"),
        )
    }
}
