use api::models::{Asset, AssetDraft, AssetFilter};
use api::query::{parse_bound, SortOrder};
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::{amount, Choice, Field};
use crate::records::{use_records, Notice};
use crate::views::ModalOverlay;

const ACCESS: Access = Access::employee(Role::Asset);

/// Which asset the dialog edits. `None` inside means a new asset.
#[derive(Clone, Copy, PartialEq)]
enum Editing {
    Closed,
    Open(Option<i64>),
}

fn dialog_title(target: Option<i64>) -> &'static str {
    match target {
        Some(_) => "Edit Asset",
        None => "New Asset",
    }
}

#[component]
pub fn EmployeeAssets() -> Element {
    let client = use_client();
    let mut banner = use_banner();

    let mut citizen = use_signal(String::new);
    let kind_filter = use_signal(String::new);
    let min_valuation = use_signal(String::new);
    let max_valuation = use_signal(String::new);
    let order = use_signal(String::new);

    let mut editing = use_signal(|| Editing::Closed);
    let mut draft_kind = use_signal(String::new);
    let mut draft_valuation = use_signal(String::new);
    let mut draft_owner = use_signal(String::new);

    let records = use_records(ACCESS, banner, move |client| {
        let citizen = citizen();
        async move { client.employee().assets(&citizen).await }
    });

    let filter = AssetFilter {
        kind: kind_filter(),
        min_valuation: parse_bound(&min_valuation()),
        max_valuation: parse_bound(&max_valuation()),
        order: SortOrder::parse(&order()),
    };
    let rows = filter.apply(&records.rows());

    let mut open_dialog = move |asset: Option<Asset>| {
        let draft = asset.as_ref().map(AssetDraft::from_asset).unwrap_or(AssetDraft {
            owner: citizen(),
            ..AssetDraft::default()
        });
        draft_kind.set(draft.kind);
        let valuation = if asset.is_some() {
            draft.valuation.to_string()
        } else {
            String::new()
        };
        draft_valuation.set(valuation);
        draft_owner.set(draft.owner);
        editing.set(Editing::Open(asset.map(|a| a.id)));
    };

    let save = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Editing::Open(target) = editing() else {
                return;
            };
            let Some(valuation) = parse_bound(&draft_valuation()) else {
                banner.error("Valuation must be a number.");
                return;
            };
            let draft = AssetDraft {
                kind: draft_kind().trim().to_string(),
                valuation,
                owner: draft_owner().trim().to_string(),
            };
            if let Err(message) = draft.validate() {
                banner.error(message);
                return;
            }
            editing.set(Editing::Closed);
            let client = client.clone();
            match target {
                Some(id) => records.mutate(banner, "Asset updated.", async move {
                    client.employee().update_asset(id, &draft).await
                }),
                None => records.mutate(banner, "Asset created.", async move {
                    client.employee().create_asset(&draft).await
                }),
            }
        }
    };

    let delete = move |asset_id: i64| {
        let client = client.clone();
        records.mutate(banner, "Asset deleted.", async move {
            client.employee().delete_asset(asset_id).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Assets" }
            BannerView { banner }

            div {
                class: "toolbar",
                input {
                    class: "search",
                    placeholder: "Citizen username (blank for all)",
                    value: "{citizen}",
                    oninput: move |evt: FormEvent| citizen.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open_dialog(None),
                    "Add Asset"
                }
            }
            div {
                class: "filters",
                Field { label: "Type", value: kind_filter, placeholder: "e.g. Land" }
                Field { label: "Min valuation", value: min_valuation, r#type: "number" }
                Field { label: "Max valuation", value: max_valuation, r#type: "number" }
                Choice {
                    label: "Sort by valuation",
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
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Type" }
                            th { "Valuation" }
                            th { "Owner" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for asset in rows {
                            tr {
                                key: "{asset.id}",
                                td { "{asset.id}" }
                                td { "{asset.kind}" }
                                td { class: "num", {amount(asset.valuation)} }
                                td { "{asset.owner}" }
                                td {
                                    class: "actions",
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: {
                                            let asset = asset.clone();
                                            move |_| open_dialog(Some(asset.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let delete = delete.clone();
                                            move |_| delete(asset.id)
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Editing::Open(target) = editing() {
                ModalOverlay {
                    title: dialog_title(target),
                    on_close: move |_| editing.set(Editing::Closed),
                    form {
                        class: "modal-form",
                        onsubmit: save,
                        Field { label: "Type", value: draft_kind }
                        Field { label: "Valuation", value: draft_valuation, r#type: "number" }
                        Field { label: "Citizen username", value: draft_owner }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}
