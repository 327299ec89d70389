use std::sync::Arc;

use triage_classify::Classifier;
use triage_config::TriageConfig;
use triage_history::{FileStore, HistoryCache};
use triage_pipeline::Orchestrator;
use triage_remote::RemoteClient;

/// The store shared by the history cache and the theme preference.
pub type Store = Arc<FileStore>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: Store,
    pub orchestrator: Orchestrator<RemoteClient, Store>,
}

impl AppContext {
    /// Open the store, load the history, and wire the orchestrator.
    #[must_use]
    pub fn init(config: &TriageConfig) -> Self {
        let store_path = config.store.resolved_path();
        tracing::debug!(path = %store_path.display(), "opening store");
        let store: Store = Arc::new(FileStore::new(store_path));

        let remote = if config.remote.is_configured() {
            Some(RemoteClient::new(&config.remote))
        } else {
            tracing::debug!("remote classification disabled; using local heuristic only");
            None
        };

        let classifier: Arc<dyn Classifier> =
            triage_server::configured_classifier(&config.classifier);
        let history = HistoryCache::load(Arc::clone(&store));
        let orchestrator = Orchestrator::new(remote, classifier, history);

        Self {
            store,
            orchestrator,
        }
    }
}
