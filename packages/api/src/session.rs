//! # Session store
//!
//! [`SessionStore`] owns the client's copy of *who is logged in*: user type,
//! role, display name, numeric id and bearer token. It is an explicit handle,
//! cloned into the HTTP client and into the UI context, never a global.
//!
//! Every setter does three things, in order:
//!
//! 1. updates the in-memory [`Identity`],
//! 2. persists the changed field into the [`SessionStorage`] (so a reload can
//!    [`restore`](SessionStore::restore) it),
//! 3. notifies every [`subscribe`](SessionStore::subscribe)d receiver through a
//!    `tokio::sync::watch` channel.
//!
//! There is no expiry timer and no refresh flow. A stored token is trusted until
//! the backend rejects it.

use std::sync::Arc;

use store::{keys, MemoryStorage, SessionStorage};
use tokio::sync::watch;

use crate::roles::{Role, UserType};

/// Client-held identity of the logged-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Identity {
    /// `None` when nobody is logged in.
    pub user_type: Option<UserType>,
    /// Raw role spelling as the backend sent it. Empty for citizens and admins.
    pub role: String,
    pub user_name: String,
    pub user_id: i64,
    pub token: Option<String>,
}

impl Identity {
    pub fn is_logged_in(&self) -> bool {
        self.user_type.is_some()
    }

    /// The role, if its spelling is one the portal knows.
    pub fn role(&self) -> Option<Role> {
        if self.role.is_empty() {
            return None;
        }
        self.role.parse().ok()
    }

    /// Get display name, falling back to the user type label.
    pub fn display_name(&self) -> &str {
        if !self.user_name.is_empty() {
            &self.user_name
        } else {
            self.user_type.map(UserType::label).unwrap_or("Guest")
        }
    }
}

struct Inner {
    storage: Box<dyn SessionStorage>,
    sender: watch::Sender<Identity>,
}

/// Shared handle to the session identity.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("identity", &*self.inner.sender.borrow())
            .finish()
    }
}

impl SessionStore {
    /// Rehydrate the identity from storage.
    pub fn restore(storage: impl SessionStorage + 'static) -> Self {
        let user_type = storage
            .get(keys::USER_TYPE)
            .and_then(|raw| raw.parse::<UserType>().ok());
        let identity = Identity {
            user_type,
            role: storage.get(keys::ROLE).unwrap_or_default(),
            user_name: storage.get(keys::USER_NAME).unwrap_or_default(),
            user_id: storage
                .get(keys::USER_ID)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(0),
            token: storage.get(keys::TOKEN).filter(|t| !t.is_empty()),
        };
        if identity.is_logged_in() {
            tracing::info!("Restored session for {}", identity.display_name());
        }

        let (sender, _) = watch::channel(identity);
        Self {
            inner: Arc::new(Inner {
                storage: Box::new(storage),
                sender,
            }),
        }
    }

    /// A session that persists nothing.
    pub fn in_memory() -> Self {
        Self::restore(MemoryStorage::new())
    }

    /// Snapshot of the current identity.
    pub fn identity(&self) -> Identity {
        self.inner.sender.borrow().clone()
    }

    /// Current bearer token, read live.
    pub fn token(&self) -> Option<String> {
        self.inner.sender.borrow().token.clone()
    }

    /// Receiver that observes every identity change.
    pub fn subscribe(&self) -> watch::Receiver<Identity> {
        self.inner.sender.subscribe()
    }

    pub fn set_token(&self, token: Option<String>) {
        self.persist(keys::TOKEN, token.as_deref());
        self.inner.sender.send_modify(|identity| identity.token = token);
    }

    pub fn set_user_type(&self, user_type: Option<UserType>) {
        self.persist(keys::USER_TYPE, user_type.map(UserType::as_str));
        self.inner
            .sender
            .send_modify(|identity| identity.user_type = user_type);
    }

    pub fn set_role(&self, role: &str) {
        if !role.is_empty() && role.parse::<Role>().is_err() {
            tracing::warn!("Unrecognised role spelling {:?}; no role-gated views will open", role);
        }
        self.persist(keys::ROLE, Some(role).filter(|r| !r.is_empty()));
        self.inner
            .sender
            .send_modify(|identity| identity.role = role.to_string());
    }

    pub fn set_user_name(&self, user_name: &str) {
        self.persist(keys::USER_NAME, Some(user_name).filter(|n| !n.is_empty()));
        self.inner
            .sender
            .send_modify(|identity| identity.user_name = user_name.to_string());
    }

    pub fn set_user_id(&self, user_id: i64) {
        self.persist(keys::USER_ID, Some(user_id.to_string().as_str()));
        self.inner
            .sender
            .send_modify(|identity| identity.user_id = user_id);
    }

    /// Replace the whole identity (after login), persisting every field and
    /// notifying subscribers once.
    pub fn establish(&self, identity: Identity) {
        if !identity.role.is_empty() && identity.role().is_none() {
            tracing::warn!(
                "Unrecognised role spelling {:?}; no role-gated views will open",
                identity.role
            );
        }
        self.persist(keys::TOKEN, identity.token.as_deref());
        self.persist(keys::USER_TYPE, identity.user_type.map(UserType::as_str));
        self.persist(keys::ROLE, Some(identity.role.as_str()).filter(|r| !r.is_empty()));
        self.persist(
            keys::USER_NAME,
            Some(identity.user_name.as_str()).filter(|n| !n.is_empty()),
        );
        self.persist(keys::USER_ID, Some(identity.user_id.to_string().as_str()));
        tracing::info!("Session established for {}", identity.display_name());
        self.inner.sender.send_replace(identity);
    }

    /// Forget the identity in memory and in storage.
    pub fn clear(&self) {
        self.inner.storage.clear_session();
        self.inner.sender.send_replace(Identity::default());
        tracing::info!("Session cleared");
    }

    fn persist(&self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.inner.storage.set(key, value),
            None => self.inner.storage.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Identity {
        Identity {
            user_type: Some(UserType::Citizen),
            role: String::new(),
            user_name: "john_doe".into(),
            user_id: 42,
            token: Some("tok-1".into()),
        }
    }

    #[test]
    fn test_establish_persists_and_restores() {
        let storage = MemoryStorage::new();
        let session = SessionStore::restore(storage.clone());
        session.establish(john());

        assert_eq!(storage.get(keys::TOKEN).as_deref(), Some("tok-1"));
        assert_eq!(storage.get(keys::USER_TYPE).as_deref(), Some("CITIZEN"));
        assert_eq!(storage.get(keys::USER_ID).as_deref(), Some("42"));
        assert!(storage.get(keys::ROLE).is_none());

        // A reload sees the same identity
        let reloaded = SessionStore::restore(storage);
        assert_eq!(reloaded.identity(), john());
    }

    #[test]
    fn test_clear_removes_everything() {
        let storage = MemoryStorage::new();
        let session = SessionStore::restore(storage.clone());
        session.establish(john());

        session.clear();

        assert!(storage.is_empty());
        assert_eq!(session.identity(), Identity::default());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_restore_tolerates_garbage() {
        let storage = MemoryStorage::new();
        storage.set(keys::USER_TYPE, "notLoggedIn");
        storage.set(keys::USER_ID, "forty-two");
        storage.set(keys::TOKEN, "");

        let identity = SessionStore::restore(storage).identity();
        assert!(!identity.is_logged_in());
        assert_eq!(identity.user_id, 0);
        assert!(identity.token.is_none());
    }

    #[test]
    fn test_setters_notify_subscribers() {
        let session = SessionStore::in_memory();
        let mut rx = session.subscribe();
        assert!(!rx.has_changed().unwrap());

        session.set_role("ASSET");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().role(), Some(Role::Asset));

        session.set_user_type(Some(UserType::PanchayatEmployee));
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().user_type,
            Some(UserType::PanchayatEmployee)
        );
    }

    #[test]
    fn test_individual_setters_persist() {
        let storage = MemoryStorage::new();
        let session = SessionStore::restore(storage.clone());

        session.set_token(Some("abc".into()));
        session.set_user_name("jane");
        session.set_user_id(7);
        assert_eq!(storage.get(keys::TOKEN).as_deref(), Some("abc"));
        assert_eq!(storage.get(keys::USER_NAME).as_deref(), Some("jane"));
        assert_eq!(storage.get(keys::USER_ID).as_deref(), Some("7"));

        session.set_token(None);
        assert!(storage.get(keys::TOKEN).is_none());
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(john().display_name(), "john_doe");
        let nameless = Identity {
            user_type: Some(UserType::Admin),
            ..Identity::default()
        };
        assert_eq!(nameless.display_name(), "Admin");
        assert_eq!(Identity::default().display_name(), "Guest");
    }
}
