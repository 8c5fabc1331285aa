use api::models::{SchemeDraft, SchemeFilter};
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::Field;
use crate::records::{use_records, Notice};
use crate::views::ModalOverlay;

const ACCESS: Access = Access::agency(Role::WelfareScheme);

/// The search box also narrows the loaded rows, whether or not the backend
/// honoured `scheme_name`.
fn scheme_filter(search: &str, by_deadline: bool) -> SchemeFilter {
    SchemeFilter {
        name: search.to_string(),
        by_deadline,
    }
}

#[component]
pub fn AgencyWelfare() -> Element {
    let client = use_client();
    let mut banner = use_banner();

    let mut search = use_signal(String::new);
    let mut by_deadline = use_signal(|| false);

    let mut creating = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut deadline = use_signal(String::new);

    let records = use_records(ACCESS, banner, move |client| {
        let search = search();
        async move { client.agency().welfare_schemes(&search).await }
    });

    let rows = scheme_filter(&search(), by_deadline()).apply(&records.rows());

    let save = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let draft = SchemeDraft {
                name: name().trim().to_string(),
                description: description().trim().to_string(),
                deadline: deadline(),
            };
            if let Err(message) = draft.validate() {
                banner.error(message);
                return;
            }
            creating.set(false);
            name.set(String::new());
            description.set(String::new());
            deadline.set(String::new());
            let client = client.clone();
            records.mutate(banner, "Welfare scheme created.", async move {
                client.agency().create_scheme(&draft).await
            });
        }
    };

    let delete = move |scheme_id: i64| {
        let client = client.clone();
        records.mutate(banner, "Welfare scheme deleted.", async move {
            client.agency().delete_scheme(scheme_id).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Welfare Schemes" }
            BannerView { banner }

            div {
                class: "toolbar",
                input {
                    class: "search",
                    placeholder: "Search by scheme name",
                    value: "{search}",
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: by_deadline(),
                        onchange: move |evt: FormEvent| by_deadline.set(evt.checked()),
                    }
                    "Sort by deadline"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| creating.set(true),
                    "New Scheme"
                }
            }

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
                            th {}
                        }
                    }
                    tbody {
                        for scheme in rows {
                            tr {
                                key: "{scheme.id}",
                                td { "{scheme.name}" }
                                td { "{scheme.description}" }
                                td { "{scheme.deadline}" }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let delete = delete.clone();
                                            move |_| delete(scheme.id)
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
                    title: "New Welfare Scheme",
                    on_close: move |_| creating.set(false),
                    form {
                        class: "modal-form",
                        onsubmit: save,
                        Field { label: "Scheme name", value: name }
                        Field { label: "Description", value: description }
                        Field { label: "Application deadline", value: deadline, r#type: "date" }
                        button { class: "btn btn-primary", r#type: "submit", "Create" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::models::WelfareScheme;

    use super::*;

    fn scheme(id: i64, name: &str, deadline: &str) -> WelfareScheme {
        WelfareScheme {
            id,
            name: name.to_string(),
            deadline: deadline.to_string(),
            ..WelfareScheme::default()
        }
    }

    #[test]
    fn test_search_narrows_loaded_schemes() {
        let rows = vec![
            scheme(1, "Health Insurance", "2025-12-31"),
            scheme(2, "Educational Grant", "2025-06-30"),
        ];
        let shown: Vec<String> = scheme_filter("health", false)
            .apply(&rows)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(shown, vec!["Health Insurance".to_string()]);

        let ids: Vec<i64> = scheme_filter("  ", true).apply(&rows).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
