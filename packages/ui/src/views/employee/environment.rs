use api::models::EnvironmentalRecord;
use api::query::parse_bound;
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::{amount, Field};
use crate::records::{use_records, Notice};
use crate::views::ModalOverlay;

const ACCESS: Access = Access::employee(Role::EnvironmentalData);

/// Measurement inputs in table order.
const MEASURES: [&str; 6] = [
    "AQI",
    "Forest cover (%)",
    "ODF",
    "Afforestation",
    "Precipitation",
    "Water quality",
];

fn record_from(year: &str, values: &[String; 6]) -> Result<EnvironmentalRecord, String> {
    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|_| "Year must be a whole number.".to_string())?;
    let mut parsed = [0.0; 6];
    for (slot, (raw, label)) in parsed.iter_mut().zip(values.iter().zip(MEASURES)) {
        if !raw.trim().is_empty() {
            *slot = parse_bound(raw).ok_or_else(|| format!("{label} must be a number."))?;
        }
    }
    let [aqi, forest_cover, odf, afforestation, precipitation, water_quality] = parsed;
    let record = EnvironmentalRecord {
        year,
        aqi,
        forest_cover,
        odf,
        afforestation,
        precipitation,
        water_quality,
    };
    record.validate()?;
    Ok(record)
}

#[component]
pub fn EmployeeEnvironment() -> Element {
    let client = use_client();
    let mut banner = use_banner();

    let mut year_filter = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut new_year = use_signal(String::new);
    let measures: [Signal<String>; 6] =
        use_hook(|| std::array::from_fn(|_| Signal::new(String::new())));

    let records = use_records(ACCESS, banner, move |client| {
        let year = year_filter();
        async move { client.employee().environmental_data(&year).await }
    });

    let mut open = move || {
        new_year.set(current_year().to_string());
        for mut field in measures {
            field.set(String::new());
        }
        creating.set(true);
    };

    let save = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let values = measures.map(|field| field());
            let record = match record_from(&new_year(), &values) {
                Ok(record) => record,
                Err(message) => {
                    banner.error(message);
                    return;
                }
            };
            creating.set(false);
            let client = client.clone();
            records.mutate(banner, "Environmental data added.", async move {
                client.employee().add_environmental(&record).await
            });
        }
    };

    let delete = move |year: i32| {
        let client = client.clone();
        records.mutate(banner, format!("Data for {year} deleted."), async move {
            client.employee().delete_environmental(year).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Environmental Data" }
            BannerView { banner }

            div {
                class: "toolbar",
                input {
                    class: "search",
                    r#type: "number",
                    placeholder: "Filter by year",
                    value: "{year_filter}",
                    oninput: move |evt: FormEvent| year_filter.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open(),
                    "Add Data"
                }
            }

            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Year" }
                            for label in MEASURES {
                                th { key: "{label}", "{label}" }
                            }
                            th {}
                        }
                    }
                    tbody {
                        for record in records.rows() {
                            tr {
                                key: "{record.year}",
                                td { "{record.year}" }
                                td { class: "num", {amount(record.aqi)} }
                                td { class: "num", {amount(record.forest_cover)} }
                                td { class: "num", {amount(record.odf)} }
                                td { class: "num", {amount(record.afforestation)} }
                                td { class: "num", {amount(record.precipitation)} }
                                td { class: "num", {amount(record.water_quality)} }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let delete = delete.clone();
                                            move |_| delete(record.year)
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
                    title: "Add Environmental Data",
                    on_close: move |_| creating.set(false),
                    form {
                        class: "modal-form",
                        onsubmit: save,
                        Field { label: "Year", value: new_year, r#type: "number" }
                        for (label, value) in MEASURES.into_iter().zip(measures) {
                            Field { key: "{label}", label, value, r#type: "number" }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> i32 {
    // Seconds per mean Gregorian year
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| 1970 + (d.as_secs() / 31_556_952) as i32)
        .unwrap_or(2024)
}
