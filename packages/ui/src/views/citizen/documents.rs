use dioxus::prelude::*;

use super::CITIZEN;
use crate::banner::{use_banner, BannerView};
use crate::records::{use_records, Notice};
use crate::views::DocumentTable;

#[component]
pub fn CitizenDocuments() -> Element {
    let banner = use_banner();
    let records = use_records(CITIZEN, banner, |client| async move {
        client.citizen().documents().await
    });

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "My Documents" }
            BannerView { banner }
            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                DocumentTable { documents: records.rows(), banner }
            }
        }
    }
}
