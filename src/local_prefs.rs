//! Browser Preferences
//!
//! `localStorage`-backed preference store, used when the UI is served
//! without the Tauri shell (e.g. `trunk serve`).

use wallet_flow::{PreferenceStore, StoreError};

pub struct LocalStoragePreferences {
    storage: web_sys::Storage,
}

impl LocalStoragePreferences {
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }

    fn storage_key(namespace: &str, key: &str) -> String {
        format!("{}.{}", namespace, key)
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, StoreError> {
        let storage_key = Self::storage_key(namespace, key);
        let raw = self
            .storage
            .get_item(&storage_key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))?;

        match raw.as_deref() {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => Err(StoreError::Corrupt { key: storage_key, value: other.to_string() }),
        }
    }

    fn put_bool(&mut self, namespace: &str, key: &str, value: bool) -> Result<(), StoreError> {
        self.storage
            .set_item(&Self::storage_key(namespace, key), if value { "true" } else { "false" })
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}
