//! # Browser `localStorage` session storage
//!
//! [`LocalStorage`] is a zero-size handle that looks up `window.localStorage` on
//! every call. Nothing is cached, so the handle is `Send + Sync` and cheap to
//! clone. When storage is unavailable (private browsing, sandboxed iframes) reads
//! return `None` and writes are dropped.

use crate::storage::SessionStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("localStorage rejected write for {}", key);
                }
            }
            None => tracing::warn!("localStorage unavailable, {} not persisted", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
