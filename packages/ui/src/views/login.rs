use api::auth::{Credentials, FieldErrors};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::Field;

#[component]
pub fn Login() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut banner = use_banner();

    let user_name = use_signal(String::new);
    let password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let credentials = Credentials::new(&user_name(), &password());
        if let Err(found) = credentials.validate() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);
        let client = client.clone();
        spawn(async move {
            match client.login(&credentials).await {
                Ok(identity) => {
                    tracing::info!("Signed in as {}", identity.user_name);
                    nav.push("/");
                }
                Err(e) => banner.failure(&e),
            }
            busy.set(false);
        });
    };

    let error = move |field: &str| errors.read().get(field).cloned().unwrap_or_default();

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "card auth-card",
                onsubmit: submit,
                h2 { "Sign In" }
                BannerView { banner }
                Field { label: "Username", value: user_name, error: error("User_name") }
                Field { label: "Password", value: password, r#type: "password", error: error("Password") }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign In" }
                }
                p {
                    class: "muted",
                    "No account? "
                    Link { to: "/signup", "Sign up" }
                }
            }
        }
    }
}
