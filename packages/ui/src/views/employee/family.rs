use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::records::{use_records, Notice};

const ACCESS: Access = Access::employee(Role::Family);

#[component]
pub fn EmployeeFamily() -> Element {
    let client = use_client();
    let mut banner = use_banner();
    let mut citizen = use_signal(String::new);
    let mut head = use_signal(String::new);

    let records = use_records(ACCESS, banner, move |client| {
        let citizen = citizen();
        async move { client.employee().families(&citizen).await }
    });

    let create = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let head_user_name = head().trim().to_string();
            if head_user_name.is_empty() {
                banner.error("Enter the username of the family head.");
                return;
            }
            head.set(String::new());
            let client = client.clone();
            records.mutate(banner, "Family created.", async move {
                client.employee().create_family(&head_user_name).await
            });
        }
    };

    let delete = move |family_id: i64| {
        let client = client.clone();
        records.mutate(banner, "Family deleted.", async move {
            client.employee().delete_family(family_id).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Families" }
            BannerView { banner }
            div {
                class: "toolbar",
                input {
                    class: "search",
                    placeholder: "Citizen username (blank for all)",
                    value: "{citizen}",
                    oninput: move |evt: FormEvent| citizen.set(evt.value()),
                }
                form {
                    class: "inline-form",
                    onsubmit: create,
                    input {
                        placeholder: "Head of family username",
                        value: "{head}",
                        oninput: move |evt: FormEvent| head.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Create Family" }
                }
            }
            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Family" }
                            th { "Head (citizen id)" }
                            th { "Members" }
                            th {}
                        }
                    }
                    tbody {
                        for family in records.rows() {
                            tr {
                                key: "{family.family_id}",
                                td { "{family.family_id}" }
                                td { "{family.head_citizen_id}" }
                                td { {family.member_names()} }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let delete = delete.clone();
                                            move |_| delete(family.family_id)
                                        },
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
}
