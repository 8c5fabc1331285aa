use api::{Access, UserType, ViewState};
use dioxus::prelude::*;

use crate::records::{use_record, Notice};
use crate::views::ProfileCard;

#[component]
pub fn EmployeeProfileView() -> Element {
    let profile = use_record(Access::Kind(UserType::PanchayatEmployee), |client| async move {
        client.employee().profile().await
    });

    let state = profile.read();
    match &*state {
        ViewState::Ready(profile) => rsx! {
            ProfileCard { title: "Employee Profile", rows: profile.rows() }
        },
        other => rsx! {
            div {
                class: "view-page",
                Notice { text: other.notice().unwrap_or("Loading...").to_string() }
            }
        },
    }
}
