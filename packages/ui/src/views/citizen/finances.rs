use dioxus::prelude::*;

use super::CITIZEN;
use crate::banner::{use_banner, BannerView};
use crate::form::amount;
use crate::records::{use_records, Notice};

#[component]
pub fn CitizenFinances() -> Element {
    let banner = use_banner();
    let records = use_records(CITIZEN, banner, |client| async move {
        client.citizen().finances().await
    });

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "My Finances" }
            BannerView { banner }
            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                FinanceTable { records: records.rows() }
            }
        }
    }
}

/// Financial records table, also used by the employee screen.
#[component]
pub fn FinanceTable(
    records: Vec<api::models::FinancialRecord>,
    #[props(default)] on_delete: Option<EventHandler<i64>>,
) -> Element {
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Year" }
                    th { "Owner" }
                    th { "Annual Income" }
                    th { "Source" }
                    th { "Tax Paid" }
                    th { "Tax Liability" }
                    th { "Debt" }
                    th { "Credit Score" }
                    th { "Last Updated" }
                    if on_delete.is_some() {
                        th {}
                    }
                }
            }
            tbody {
                for record in records {
                    tr {
                        key: "{record.id}",
                        td { "{record.year}" }
                        td { "{record.owner}" }
                        td { class: "num", {amount(record.annual_income)} }
                        td { "{record.income_source}" }
                        td { class: "num", {amount(record.tax_paid)} }
                        td { class: "num", {amount(record.tax_liability)} }
                        td { class: "num", {amount(record.debt_liability)} }
                        td { class: "num", {record.credit_score.map(|s| format!("{s:.0}")).unwrap_or_else(|| "-".to_string())} }
                        td { "{record.last_updated}" }
                        if let Some(on_delete) = on_delete {
                            td {
                                button {
                                    class: "btn btn-danger",
                                    onclick: move |_| on_delete.call(record.id),
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
