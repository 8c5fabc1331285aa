use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::SessionStorage;

/// In-memory SessionStorage for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get(keys::TOKEN).is_none());

        storage.set(keys::TOKEN, "abc");
        assert_eq!(storage.get(keys::TOKEN).as_deref(), Some("abc"));

        storage.set(keys::TOKEN, "def");
        assert_eq!(storage.get(keys::TOKEN).as_deref(), Some("def"));

        storage.remove(keys::TOKEN);
        assert!(storage.get(keys::TOKEN).is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set(keys::USER_NAME, "john_doe");
        assert_eq!(other.get(keys::USER_NAME).as_deref(), Some("john_doe"));
    }

    #[test]
    fn test_clear_session_leaves_foreign_keys() {
        let storage = MemoryStorage::new();
        for key in keys::ALL {
            storage.set(key, "x");
        }
        storage.set("theme", "dark");

        storage.clear_session();

        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
    }
}
