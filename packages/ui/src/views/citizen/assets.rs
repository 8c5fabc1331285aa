use dioxus::prelude::*;

use super::CITIZEN;
use crate::banner::{use_banner, BannerView};
use crate::form::amount;
use crate::records::{use_records, Notice};

#[component]
pub fn CitizenAssets() -> Element {
    let banner = use_banner();
    let records = use_records(CITIZEN, banner, |client| async move {
        client.citizen().assets().await
    });

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "My Assets" }
            BannerView { banner }
            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Type" }
                            th { "Valuation" }
                            th { "Season" }
                            th { "Crop" }
                            th { "Area" }
                            th { "Yield" }
                        }
                    }
                    tbody {
                        for asset in records.rows() {
                            tr {
                                key: "{asset.id}",
                                td { "{asset.kind}" }
                                td { class: "num", {amount(asset.valuation)} }
                                if asset.is_agricultural() {
                                    td { {asset.season.clone().unwrap_or_default()} }
                                    td { {asset.crop_type.clone().unwrap_or_default()} }
                                    td { class: "num", {asset.area_cultivated.map(amount).unwrap_or_default()} }
                                    td { class: "num", {asset.crop_yield.map(amount).unwrap_or_default()} }
                                } else {
                                    td { colspan: "4", class: "muted", "Not agricultural" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
