use api::models::CensusRecord;
use api::Access;
use dioxus::prelude::*;

use crate::banner::{use_banner, BannerView};
use crate::chart::{census_series, environment_series, LineChart};
use crate::form::amount;
use crate::records::{use_records, Notice};

/// Landing page: public census and environmental trends.
#[component]
pub fn Home() -> Element {
    let banner = use_banner();
    let census = use_records(Access::Anyone, banner, |client| async move {
        client.public().census().await
    });
    let environment = use_records(Access::Anyone, banner, |client| async move {
        client.public().environmental_data().await
    });

    let census_rows = CensusRecord::chronological(&census.rows());
    let (census_labels, census_lines) = census_series(&census_rows);
    let (env_labels, env_lines) = environment_series(&environment.rows());

    rsx! {
        div {
            class: "view-page home",
            BannerView { banner }
            header {
                class: "hero",
                h3 { "Welcome to" }
                h1 { "SSH AP Daemon Village" }
            }

            section {
                class: "card",
                h2 { class: "section-title", "Environmental Data" }
                if let Some(text) = environment.notice() {
                    Notice { text }
                } else {
                    LineChart { title: "Environmental indicators by year", labels: env_labels, series: env_lines }
                }
            }

            section {
                class: "card",
                h2 { class: "section-title", "Census Data" }
                if let Some(text) = census.notice() {
                    Notice { text }
                } else {
                    LineChart { title: "Year-wise Census Trends", labels: census_labels, series: census_lines }
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Year" }
                                th { "Total Population" }
                                th { "Male" }
                                th { "Female" }
                                th { "Literacy Rate (%)" }
                            }
                        }
                        tbody {
                            for record in census_rows {
                                tr {
                                    key: "{record.year}",
                                    td { "{record.year}" }
                                    td { class: "num", "{record.total}" }
                                    td { class: "num", "{record.male}" }
                                    td { class: "num", "{record.female}" }
                                    td { class: "num", {amount(record.literacy)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
