//! Platform session storage.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Native**: `<data_dir>/panchayat-portal/session.toml` via [`store::FileStorage`]
//! - **WASM without `web`**: kept in memory only

use api::SessionStore;

/// Open the session persisted on this platform.
pub fn restore_session() -> SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::restore(store::LocalStorage::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::restore(store::MemoryStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("panchayat-portal")
            .join("session.toml");
        SessionStore::restore(store::FileStorage::new(path))
    }
}

/// Sleep on whichever timer the platform has.
pub(crate) async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
