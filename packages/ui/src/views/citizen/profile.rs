use api::ViewState;
use dioxus::prelude::*;

use super::CITIZEN;
use crate::records::{use_record, Notice};
use crate::views::ProfileCard;

#[component]
pub fn CitizenProfileView() -> Element {
    let profile = use_record(CITIZEN, |client| async move {
        client.citizen().profile().await
    });

    let state = profile.read();
    match &*state {
        ViewState::Ready(profile) => rsx! {
            ProfileCard { title: "My Profile", rows: profile.rows() }
        },
        other => rsx! {
            div {
                class: "view-page",
                Notice { text: other.notice().unwrap_or("Loading...").to_string() }
            }
        },
    }
}
