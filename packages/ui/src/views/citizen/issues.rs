use api::models::IssueDraft;
use dioxus::prelude::*;

use super::CITIZEN;
use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::records::{use_records, Notice};

#[component]
pub fn CitizenIssues() -> Element {
    let client = use_client();
    let mut banner = use_banner();
    let mut description = use_signal(String::new);
    let records = use_records(CITIZEN, banner, |client| async move {
        client.citizen().issues().await
    });

    let report = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(draft) = IssueDraft::new(&description()) else {
                banner.error("Describe the issue before submitting.");
                return;
            };
            description.set(String::new());
            let client = client.clone();
            records.mutate(banner, "Issue reported.", async move {
                client.citizen().report_issue(&draft).await
            });
        }
    };

    let withdraw = move |issue_id: i64| {
        let client = client.clone();
        records.mutate(banner, "Issue deleted.", async move {
            client.citizen().withdraw_issue(issue_id).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "My Issues" }
            BannerView { banner }
            form {
                class: "inline-form",
                onsubmit: report,
                textarea {
                    placeholder: "Describe the issue",
                    value: "{description}",
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Report Issue" }
            }
            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "#" }
                            th { "Description" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        for issue in records.rows() {
                            tr {
                                key: "{issue.id}",
                                td { "{issue.id}" }
                                td { "{issue.description}" }
                                td { span { class: "badge {issue.status.badge()}", "{issue.status}" } }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let withdraw = withdraw.clone();
                                            move |_| withdraw(issue.id)
                                        },
                                        "Delete"
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
