//! Durable client-side storage for the portal.
//!
//! The session identity survives a reload by being written, field by field, into a
//! [`SessionStorage`]. Which back-end is used depends on the platform:
//!
//! | Back-end | Platform | Persistence |
//! |----------|----------|-------------|
//! | [`LocalStorage`] | WASM + `web` feature | browser `localStorage` |
//! | [`FileStorage`] | native | a small TOML file under the data directory |
//! | [`MemoryStorage`] | everywhere | none (tests, fallbacks) |
//!
//! [`PortalConfig`] holds the backend address and UI timings.

pub mod config;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

mod file_store;
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ApiConfig, PortalConfig, StoreError, UiConfig};
pub use storage::{keys, SessionStorage};
