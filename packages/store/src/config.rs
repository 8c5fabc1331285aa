//! # Portal configuration: `portal.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! request_timeout_secs = 30     # 0 disables the timeout (native only)
//!
//! [ui]
//! banner_timeout_ms = 3000
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PortalConfig`] | Top-level config, TOML (de)serialisation and layered loading on native. |
//! | [`ApiConfig`] | Backend address and request timeout. |
//! | [`UiConfig`] | How long error banners stay up before clearing themselves. |
//!
//! Every struct derives `Default`, so a missing or empty file is the default
//! configuration. On native, [`PortalConfig::load`] layers `portal.toml` and
//! `PORTAL__*` environment variables (after reading `.env`) over the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to load configuration: {0}")]
    Layered(#[from] config::ConfigError),
}

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. 0 disables it.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// UI timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_banner_timeout")]
    pub banner_timeout_ms: u64,
}

fn default_banner_timeout() -> u64 {
    3000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner_timeout_ms: default_banner_timeout(),
        }
    }
}

impl PortalConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Builder method to point at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load defaults, then `portal.toml` (optional), then `PORTAL__*` environment
    /// variables, e.g. `PORTAL__API__BASE_URL`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, StoreError> {
        use config::{Config, Environment, File, FileFormat};

        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.request_timeout_secs", defaults.api.request_timeout_secs)?
            .set_default("ui.banner_timeout_ms", defaults.ui.banner_timeout_ms)?
            .add_source(
                File::with_name(Self::filename())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("PORTAL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Browser builds have no config file; the base URL may be baked in at build
    /// time through `PORTAL_API_BASE_URL`.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, StoreError> {
        let config = Self::default();
        Ok(match option_env!("PORTAL_API_BASE_URL") {
            Some(url) => config.with_base_url(url),
            None => config,
        })
    }

    /// Trailing slashes trimmed so paths can be appended with `/`.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.ui.banner_timeout_ms, 3000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PortalConfig::from_toml(
            r#"
            [api]
            base_url = "https://panchayat.example.org/"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://panchayat.example.org");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(PortalConfig::from_toml("").unwrap(), PortalConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PortalConfig::default().with_base_url("http://10.0.0.5:9000");
        let text = config.to_toml().unwrap();
        assert_eq!(PortalConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_environment_overrides_base_url() {
        std::env::set_var("PORTAL__API__BASE_URL", "http://panchayat.internal:8080");
        let config = PortalConfig::load().unwrap();
        std::env::remove_var("PORTAL__API__BASE_URL");
        assert_eq!(config.base_url(), "http://panchayat.internal:8080");
        assert_eq!(config.api.request_timeout_secs, 30);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(PortalConfig::from_toml("[api]\nrequest_timeout_secs = \"soon\"").is_err());
    }
}
