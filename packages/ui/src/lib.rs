//! This crate contains all shared UI for the portal: the session provider,
//! the role-gated navbar, shared widgets and every screen.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{use_client, use_config, use_session, AuthProvider, LogoutButton};

mod banner;
pub use banner::{use_banner, Banner, BannerView};

mod chart;
pub use chart::{LineChart, Series};

mod download;
pub use download::save_file;

mod form;
pub use form::{amount, Choice, Field, SortHeader};

mod navbar;
pub use navbar::Navbar;

mod records;
pub use records::{use_record, use_records, Notice, Records};

mod storage;
pub use storage::restore_session;
