//! Persisted theme preference.

use triage_core::Theme;
use triage_core::limits::THEME_KEY;

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Read the stored theme. Unknown tokens and read failures read as absent.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Option<Theme> {
    match store.get(THEME_KEY) {
        Ok(Some(token)) => token.parse().ok(),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(%e, "failed to read theme preference");
            None
        }
    }
}

/// Store the theme token.
///
/// # Errors
///
/// Returns [`StoreError`] if the store cannot be written.
pub fn save_theme<S: KeyValueStore + ?Sized>(store: &S, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str())
}
