use dioxus::prelude::*;

use super::CITIZEN;
use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::records::{use_records, Notice};

#[component]
pub fn CitizenWelfare() -> Element {
    let client = use_client();
    let banner = use_banner();
    let records = use_records(CITIZEN, banner, |client| async move {
        client.citizen().welfare_schemes().await
    });

    let apply = move |scheme_id: i64| {
        let client = client.clone();
        records.mutate(banner, "Application submitted.", async move {
            client.citizen().enrol(scheme_id).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Welfare Schemes" }
            BannerView { banner }
            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Scheme" }
                            th { "Description" }
                            th { "Deadline" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for scheme in records.rows() {
                            tr {
                                key: "{scheme.id}",
                                td { "{scheme.name}" }
                                td { "{scheme.description}" }
                                td { "{scheme.deadline}" }
                                td {
                                    if let Some(status) = scheme.status {
                                        span { class: "badge", "{status}" }
                                    } else {
                                        button {
                                            class: "btn btn-primary",
                                            onclick: {
                                                let apply = apply.clone();
                                                move |_| apply(scheme.id)
                                            },
                                            "Apply"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
