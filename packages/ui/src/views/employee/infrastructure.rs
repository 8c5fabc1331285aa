use api::models::{CostUpdate, InfrastructureProject};
use api::query::parse_bound;
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::{amount, Field};
use crate::records::{use_records, Notice};
use crate::views::ModalOverlay;

const ACCESS: Access = Access::employee(Role::Infrastructure);

#[component]
pub fn EmployeeInfrastructure() -> Element {
    let client = use_client();
    let mut banner = use_banner();
    let mut updating = use_signal(|| Option::<InfrastructureProject>::None);
    let mut new_cost = use_signal(String::new);

    let records = use_records(ACCESS, banner, |client| async move {
        client.employee().infrastructure().await
    });

    let mut open = move |project: InfrastructureProject| {
        new_cost.set(project.actual_cost.to_string());
        updating.set(Some(project));
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(project) = updating() else {
            return;
        };
        let actual_cost = match parse_bound(&new_cost()) {
            Some(cost) if cost >= 0.0 => cost,
            _ => {
                banner.error("Actual cost must be a non-negative number.");
                return;
            }
        };
        updating.set(None);
        let update = CostUpdate {
            id: project.id,
            actual_cost,
        };
        let client = client.clone();
        records.mutate(banner, "Actual cost updated.", async move {
            client.employee().update_actual_cost(update).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Infrastructure" }
            BannerView { banner }

            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Description" }
                            th { "Location" }
                            th { "Funding" }
                            th { "Actual Cost" }
                            th { "Agency" }
                            th {}
                        }
                    }
                    tbody {
                        for project in records.rows() {
                            tr {
                                key: "{project.id}",
                                td { {project.description().to_string()} }
                                td { {project.location().to_string()} }
                                td { class: "num", {amount(project.funding)} }
                                td {
                                    class: if project.overrun() > 0.0 { "num over-budget" } else { "num" },
                                    {amount(project.actual_cost)}
                                }
                                td { {project.agency.clone().unwrap_or_default()} }
                                td {
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: {
                                            let project = project.clone();
                                            move |_| open(project.clone())
                                        },
                                        "Update Cost"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(project) = updating() {
                ModalOverlay {
                    title: "Update Actual Cost",
                    on_close: move |_| updating.set(None),
                    form {
                        class: "modal-form",
                        onsubmit: save,
                        p { "Updating actual cost for: " strong { {project.description().to_string()} } }
                        Field { label: "New actual cost", value: new_cost, r#type: "number" }
                        button { class: "btn btn-primary", r#type: "submit", "Update" }
                    }
                }
            }
        }
    }
}
