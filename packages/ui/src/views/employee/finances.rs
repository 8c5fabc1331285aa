use api::models::{FinanceFilter, FinancialDraft};
use api::query::{parse_bound, SortOrder};
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::{Choice, Field};
use crate::records::{use_records, Notice};
use crate::views::citizen::FinanceTable;
use crate::views::ModalOverlay;

const ACCESS: Access = Access::employee(Role::FinancialData);

/// Form state for a new financial record.
#[derive(Clone, Copy)]
struct DraftFields {
    user_name: Signal<String>,
    year: Signal<String>,
    annual_income: Signal<String>,
    income_source: Signal<String>,
    tax_paid: Signal<String>,
    tax_liability: Signal<String>,
    debt_liability: Signal<String>,
    credit_score: Signal<String>,
}

impl DraftFields {
    fn new() -> Self {
        Self {
            user_name: Signal::new(String::new()),
            year: Signal::new(String::new()),
            annual_income: Signal::new(String::new()),
            income_source: Signal::new(String::new()),
            tax_paid: Signal::new(String::new()),
            tax_liability: Signal::new(String::new()),
            debt_liability: Signal::new(String::new()),
            credit_score: Signal::new(String::new()),
        }
    }

    fn draft(&self) -> Result<FinancialDraft, String> {
        let money = |label: &str, raw: Signal<String>| {
            let raw = raw();
            if raw.trim().is_empty() {
                return Ok(0.0);
            }
            parse_bound(&raw).ok_or_else(|| format!("{label} must be a number."))
        };
        let year = self
            .year
            .read()
            .trim()
            .parse::<i32>()
            .map_err(|_| "Year must be a whole number.".to_string())?;
        let credit_score = match (self.credit_score)().trim() {
            "" => None,
            raw => Some(parse_bound(raw).ok_or("Credit score must be a number.")?),
        };
        let draft = FinancialDraft {
            year,
            annual_income: money("Annual income", self.annual_income)?,
            income_source: self.income_source.read().trim().to_string(),
            tax_paid: money("Tax paid", self.tax_paid)?,
            tax_liability: money("Tax liability", self.tax_liability)?,
            debt_liability: money("Debt liability", self.debt_liability)?,
            credit_score,
            user_name: self.user_name.read().trim().to_string(),
        };
        draft.validate()?;
        Ok(draft)
    }

    fn clear(&self) {
        for mut field in [
            self.user_name,
            self.year,
            self.annual_income,
            self.income_source,
            self.tax_paid,
            self.tax_liability,
            self.debt_liability,
            self.credit_score,
        ] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn EmployeeFinances() -> Element {
    let client = use_client();
    let mut banner = use_banner();

    let year = use_signal(String::new);
    let citizen = use_signal(String::new);
    let min_income = use_signal(String::new);
    let max_income = use_signal(String::new);
    let order = use_signal(String::new);

    let mut creating = use_signal(|| false);
    let fields = use_hook(DraftFields::new);

    let records = use_records(ACCESS, banner, move |client| {
        let year = year();
        let citizen = citizen();
        async move { client.employee().financial_data(&year, &citizen).await }
    });

    let filter = FinanceFilter {
        min_income: parse_bound(&min_income()),
        max_income: parse_bound(&max_income()),
        order: SortOrder::parse(&order()),
    };
    let rows = filter.apply(&records.rows());

    let save = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let draft = match fields.draft() {
                Ok(draft) => draft,
                Err(message) => {
                    banner.error(message);
                    return;
                }
            };
            fields.clear();
            creating.set(false);
            let client = client.clone();
            records.mutate(banner, "Financial record added.", async move {
                client.employee().create_financial(&draft).await
            });
        }
    };

    let delete = move |financial_id: i64| {
        let client = client.clone();
        records.mutate(banner, "Financial record deleted.", async move {
            client.employee().delete_financial(financial_id).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Financial Data" }
            BannerView { banner }

            div {
                class: "toolbar",
                Field { label: "Year", value: year, r#type: "number" }
                Field { label: "Citizen username", value: citizen }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| creating.set(true),
                    "Add Record"
                }
            }
            div {
                class: "filters",
                Field { label: "Min income", value: min_income, r#type: "number" }
                Field { label: "Max income", value: max_income, r#type: "number" }
                Choice {
                    label: "Sort by income",
                    value: order,
                    placeholder: "Unsorted",
                    options: vec![
                        ("asc".to_string(), "Low to high".to_string()),
                        ("desc".to_string(), "High to low".to_string()),
                    ],
                }
            }

            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                FinanceTable { records: rows, on_delete: delete }
            }

            if creating() {
                ModalOverlay {
                    title: "New Financial Record",
                    on_close: move |_| creating.set(false),
                    form {
                        class: "modal-form",
                        onsubmit: save,
                        Field { label: "Citizen username", value: fields.user_name }
                        Field { label: "Year", value: fields.year, r#type: "number" }
                        Field { label: "Annual income", value: fields.annual_income, r#type: "number" }
                        Field { label: "Income source", value: fields.income_source }
                        Field { label: "Tax paid", value: fields.tax_paid, r#type: "number" }
                        Field { label: "Tax liability", value: fields.tax_liability, r#type: "number" }
                        Field { label: "Debt liability", value: fields.debt_liability, r#type: "number" }
                        Field { label: "Credit score", value: fields.credit_score, r#type: "number", placeholder: "Optional" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}
