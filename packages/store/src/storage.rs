//! # Session storage trait
//!
//! [`SessionStorage`] is a flat string key/value interface, the shape of the
//! browser's `localStorage`. The session store in the `api` crate writes each
//! identity field under one of the [`keys`] so a page reload can rehydrate it.
//!
//! Implementations never fail loudly. A broken or unavailable store behaves like
//! an empty one: reads return `None` and writes are dropped (and logged). The
//! authoritative identity always lives on the backend; losing the local copy only
//! means logging in again.

/// Keys under which the session identity is persisted.
pub mod keys {
    pub const TOKEN: &str = "jwtToken";
    pub const USER_TYPE: &str = "userType";
    pub const ROLE: &str = "role";
    pub const USER_NAME: &str = "userName";
    pub const USER_ID: &str = "userId";

    /// Every session key, in the order they are cleared on logout.
    pub const ALL: [&str; 5] = [TOKEN, USER_TYPE, ROLE, USER_NAME, USER_ID];
}

/// Synchronous string key/value storage.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Remove every session key.
    fn clear_session(&self) {
        for key in keys::ALL {
            self.remove(key);
        }
    }
}
