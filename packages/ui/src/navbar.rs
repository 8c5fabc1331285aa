use api::{sections, Section};
use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};
use crate::icons::FaHouse;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the links the session is allowed to see.
#[component]
pub fn Navbar() -> Element {
    let identity = use_session();
    let entries = sections(&identity());
    let greeting = identity()
        .is_logged_in()
        .then(|| identity().display_name().to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: Section::Home.path(),
                Icon { icon: FaHouse, width: 16, height: 16 }
                span { "Home" }
            }
            div {
                class: "navbar-links",
                for section in entries {
                    if section == Section::Logout {
                        LogoutButton { key: "{section.label()}", class: "navbar-link navbar-logout" }
                    } else {
                        Link {
                            key: "{section.path()}",
                            class: "navbar-link",
                            active_class: "active",
                            to: section.path(),
                            "{section.label()}"
                        }
                    }
                }
            }
            if let Some(name) = greeting {
                span { class: "navbar-user", "{name}" }
            }
        }
    }
}
