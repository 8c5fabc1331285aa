//! Session context and hooks for the UI.

use api::{Identity, Portal, PortalConfig};
use dioxus::prelude::*;

use crate::storage::restore_session;

/// The identity of the logged-in user.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<Identity> {
    use_context::<Signal<Identity>>()
}

/// The portal client shared by every view.
pub fn use_client() -> Portal {
    use_context::<Portal>()
}

pub fn use_config() -> PortalConfig {
    use_context::<PortalConfig>()
}

/// Provider component that owns the session and the client.
/// Wrap your app with this component before the router.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_hook(|| {
        PortalConfig::load().unwrap_or_else(|e| {
            tracing::error!("Falling back to default configuration: {}", e);
            PortalConfig::default()
        })
    });
    let session = use_hook(restore_session);
    let client = use_hook({
        let config = config.clone();
        let session = session.clone();
        move || match Portal::connect(&config, session) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {}", e);
                None
            }
        }
    });

    let mut identity = use_signal(|| session.identity());

    // Mirror every session change into the signal
    use_hook(|| {
        let mut changes = session.subscribe();
        spawn(async move {
            while changes.changed().await.is_ok() {
                let current = changes.borrow_and_update().clone();
                identity.set(current);
            }
        });
    });

    use_context_provider(|| identity);
    use_context_provider(|| config.clone());

    let Some(client) = client else {
        return rsx! {
            div { class: "portal-fatal", "The portal could not start its network client." }
        };
    };
    use_context_provider(|| client.clone());

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string(), into)] label: String,
    #[props(default, into)] class: String,
) -> Element {
    let client = use_client();
    let nav = use_navigator();

    let onclick = move |_: MouseEvent| {
        client.logout();
        nav.push("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
