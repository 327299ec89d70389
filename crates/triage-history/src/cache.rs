//! Bounded, most-recent-first log of completed classifications.

use triage_core::HistoryEntry;
use triage_core::limits::{HISTORY_KEY, MAX_HISTORY_ITEMS};

use crate::store::KeyValueStore;

/// The history cache.
///
/// Owns the in-memory list and mirrors it to one key of a [`KeyValueStore`]
/// after every mutation. Persistence failures are logged and swallowed; the
/// in-memory list stays authoritative for the rest of the session.
#[derive(Debug)]
pub struct HistoryCache<S> {
    store: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryCache<S> {
    /// Load the persisted history.
    ///
    /// A missing key, an unreadable store, or an unparseable value all yield
    /// an empty history. Over-long persisted lists are truncated.
    pub fn load(store: S) -> Self {
        let mut entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<HistoryEntry>>(&raw).unwrap_or_else(|e| {
                tracing::error!(%e, "failed to parse persisted history, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(%e, "failed to read persisted history, starting empty");
                Vec::new()
            }
        };
        entries.truncate(MAX_HISTORY_ITEMS);

        tracing::debug!(entries = entries.len(), "history loaded");
        Self { store, entries }
    }

    /// Prepend `entry`, drop entries beyond [`MAX_HISTORY_ITEMS`], and persist.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ITEMS);
        self.persist();
    }

    /// All entries, most recent first.
    #[must_use]
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Empty the history and persist the empty list.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Linear lookup by id.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Largest id currently retained.
    #[must_use]
    pub fn latest_id(&self) -> Option<i64> {
        self.entries.iter().map(|entry| entry.id).max()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Write the full list to the store.
    pub fn persist(&self) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(%e, "failed to serialize history");
                return;
            }
        };
        if let Err(e) = self.store.set(HISTORY_KEY, &raw) {
            tracing::error!(%e, "failed to persist history");
        }
    }
}
