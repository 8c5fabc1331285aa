//! Every screen of the portal. Route wiring lives in the platform crate.

pub mod agency;
pub mod citizen;
pub mod employee;

mod admin;
pub use admin::AdminDashboard;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod not_found;
pub use not_found::NotFound;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod document_table;
pub use document_table::DocumentTable;

use dioxus::prelude::*;

/// Label/value card used by the three profile screens.
#[component]
pub fn ProfileCard(#[props(into)] title: String, rows: Vec<(&'static str, String)>) -> Element {
    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            dl {
                class: "profile-card",
                for (label, value) in rows {
                    div {
                        key: "{label}",
                        class: "profile-row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}
