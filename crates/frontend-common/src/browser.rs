//! Browser local storage backing the persisted session

use rankboard_core::{Error, KeyValueStore, Result};
use web_sys::Storage;

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Holds no JS handles, so it can live inside the `Send + Sync` controller;
/// the storage object is looked up on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage =
            Self::storage().ok_or_else(|| Error::Storage("localStorage is unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("failed to write {key}: {e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
