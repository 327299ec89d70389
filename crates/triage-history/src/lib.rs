//! # triage-history
//!
//! Local persistence for triage: a string-keyed [`KeyValueStore`], the
//! bounded [`HistoryCache`] of past classifications, and the theme
//! preference. The two persisted keys are
//! [`triage_core::limits::HISTORY_KEY`] and [`triage_core::limits::THEME_KEY`].

mod cache;
mod error;
mod store;
mod theme;

pub use cache::HistoryCache;
pub use error::StoreError;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{load_theme, save_theme};
