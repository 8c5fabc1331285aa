use api::models::{IssueFilter, IssueStatus, StatusUpdate};
use api::query::SortOrder;
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::Choice;
use crate::records::{use_records, Notice};

const ACCESS: Access = Access::employee(Role::Issues);

fn status_options() -> Vec<(String, String)> {
    IssueStatus::SETTABLE
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn EmployeeIssues() -> Element {
    let client = use_client();
    let banner = use_banner();
    let status_filter = use_signal(String::new);
    let order = use_signal(String::new);

    let records = use_records(ACCESS, banner, |client| async move {
        client.employee().issues().await
    });

    let filter = IssueFilter {
        status: Some(status_filter())
            .filter(|s| !s.is_empty())
            .map(|s| IssueStatus::parse(&s)),
        order: SortOrder::parse(&order()),
    };
    let rows = filter.apply(&records.rows());

    let set_status = move |issue_id: i64, raw: String| {
        let update = StatusUpdate {
            issue_id,
            status: IssueStatus::parse(&raw),
        };
        let client = client.clone();
        records.mutate(banner, "Status updated.", async move {
            client.employee().set_issue_status(&update).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Issues" }
            BannerView { banner }
            div {
                class: "filters",
                Choice {
                    label: "Status",
                    value: status_filter,
                    placeholder: "All",
                    options: status_options(),
                }
                Choice {
                    label: "Sort by ID",
                    value: order,
                    placeholder: "Unsorted",
                    options: vec![
                        ("asc".to_string(), "Oldest first".to_string()),
                        ("desc".to_string(), "Newest first".to_string()),
                    ],
                }
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
                            th { "Reported by" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for issue in rows {
                            tr {
                                key: "{issue.id}",
                                td { "{issue.id}" }
                                td { "{issue.description}" }
                                td { "{issue.reporter}" }
                                td {
                                    select {
                                        value: "{issue.status.as_str()}",
                                        onchange: {
                                            let set_status = set_status.clone();
                                            move |evt: FormEvent| set_status(issue.id, evt.value())
                                        },
                                        for status in IssueStatus::SETTABLE {
                                            option {
                                                key: "{status.as_str()}",
                                                value: "{status.as_str()}",
                                                selected: status == issue.status,
                                                "{status.label()}"
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
}
