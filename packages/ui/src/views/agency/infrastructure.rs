use api::models::InfrastructureDraft;
use api::query::parse_bound;
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::{amount, Field};
use crate::records::{use_records, Notice};
use crate::views::ModalOverlay;

const ACCESS: Access = Access::agency(Role::Infrastructure);

#[component]
pub fn AgencyInfrastructure() -> Element {
    let client = use_client();
    let mut banner = use_banner();

    let mut location_filter = use_signal(String::new);

    let mut creating = use_signal(|| false);
    let description = use_signal(String::new);
    let location = use_signal(String::new);
    let funding = use_signal(String::new);
    let actual_cost = use_signal(String::new);

    let records = use_records(ACCESS, banner, move |client| {
        let location = location_filter();
        async move { client.agency().infrastructure(&location).await }
    });

    let save = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let (Some(funding_value), Some(cost_value)) =
                (parse_bound(&funding()), parse_bound(&actual_cost()))
            else {
                banner.error("Funding and actual cost must be numbers.");
                return;
            };
            let draft = InfrastructureDraft {
                description: description().trim().to_string(),
                location: location().trim().to_string(),
                funding: funding_value,
                actual_cost: cost_value,
            };
            if let Err(message) = draft.validate() {
                banner.error(message);
                return;
            }
            creating.set(false);
            for mut field in [description, location, funding, actual_cost] {
                field.set(String::new());
            }
            let client = client.clone();
            records.mutate(banner, "Project created.", async move {
                client.agency().create_project(&draft).await
            });
        }
    };

    let delete = move |infra_id: i64| {
        let client = client.clone();
        records.mutate(banner, "Project deleted.", async move {
            client.agency().delete_project(infra_id).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Infrastructure Projects" }
            BannerView { banner }

            div {
                class: "toolbar",
                input {
                    class: "search",
                    placeholder: "Filter by location",
                    value: "{location_filter}",
                    oninput: move |evt: FormEvent| location_filter.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| creating.set(true),
                    "New Project"
                }
            }

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
                                td { class: "num", {amount(project.actual_cost)} }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let delete = delete.clone();
                                            move |_| delete(project.id)
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if creating() {
                ModalOverlay {
                    title: "New Infrastructure Project",
                    on_close: move |_| creating.set(false),
                    form {
                        class: "modal-form",
                        onsubmit: save,
                        Field { label: "Description", value: description }
                        Field { label: "Location", value: location }
                        Field { label: "Funding", value: funding, r#type: "number" }
                        Field { label: "Actual cost", value: actual_cost, r#type: "number" }
                        button { class: "btn btn-primary", r#type: "submit", "Create" }
                    }
                }
            }
        }
    }
}
