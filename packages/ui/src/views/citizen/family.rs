use dioxus::prelude::*;

use super::CITIZEN;
use crate::banner::{use_banner, BannerView};
use crate::records::{use_records, Notice};

#[component]
pub fn CitizenFamily() -> Element {
    let banner = use_banner();
    let records = use_records(CITIZEN, banner, |client| async move {
        client.citizen().family().await
    });

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "My Family" }
            BannerView { banner }
            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                ul {
                    class: "member-list",
                    for member in records.rows() {
                        li { key: "{member.user_name}", "{member.user_name}" }
                    }
                }
            }
        }
    }
}
