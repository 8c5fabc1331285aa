//! # Filesystem-backed session storage
//!
//! [`FileStorage`] keeps the session keys in a single flat TOML table. It is used
//! on desktop builds and by tooling that talks to the portal backend outside a
//! browser.
//!
//! ```toml
//! jwtToken = "eyJhbGciOi..."
//! userType = "CITIZEN"
//! role = ""
//! userName = "john_doe"
//! userId = "42"
//! ```
//!
//! Callers pick the path from the platform data directory; the
//! `ui` crate does this when it builds the platform storage.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::storage::SessionStorage;

/// Filesystem-backed SessionStorage for native persistence.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_table(&self) -> BTreeMap<String, String> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match toml::from_str(&content) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }

    fn write_table(&self, table: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let content = match toml::to_string(table) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to serialise session: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, content) {
            tracing::warn!("Failed to write session file {}: {}", self.path.display(), e);
        }
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        let Ok(_guard) = self.lock.lock() else {
            return;
        };
        let mut table = self.read_table();
        f(&mut table);
        self.write_table(&table);
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.update(|table| {
            table.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.update(|table| {
            table.remove(key);
        });
    }
}
