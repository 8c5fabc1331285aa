use api::models::{InfraColumn, InfraFilter};
use api::query::SortOrder;
use dioxus::prelude::*;

use super::CITIZEN;
use crate::banner::{use_banner, BannerView};
use crate::form::{amount, SortHeader};
use crate::records::{use_records, Notice};

#[component]
pub fn CitizenInfrastructure() -> Element {
    let banner = use_banner();
    let mut filter = use_signal(InfraFilter::default);
    let records = use_records(CITIZEN, banner, |client| async move {
        client.citizen().infrastructure().await
    });

    let rows = filter.read().apply(&records.rows());
    let arrow = move |column: InfraColumn| {
        let filter = filter.read();
        (filter.column == column).then_some(match filter.order {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        })
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Infrastructure Projects" }
            BannerView { banner }
            input {
                class: "search",
                placeholder: "Search description or location",
                value: "{filter.read().search}",
                oninput: move |evt: FormEvent| filter.write().search = evt.value(),
            }
            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for column in InfraColumn::ALL {
                                SortHeader {
                                    key: "{column.label()}",
                                    label: column.label(),
                                    arrow: arrow(column),
                                    onclick: move |_| filter.write().click(column),
                                }
                            }
                            th { "Agency" }
                        }
                    }
                    tbody {
                        for project in rows {
                            tr {
                                key: "{project.id}",
                                td { "{project.description()}" }
                                td { "{project.location()}" }
                                td { class: "num", {amount(project.funding)} }
                                td { class: "num", {amount(project.actual_cost)} }
                                td { {project.agency.clone().unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
