use api::models::{UserAccount, UserColumn, UserFilter};
use api::{Access, UserType};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::chart::{census_series, LineChart};
use crate::form::{Choice, SortHeader};
use crate::records::{use_records, Notice};

const ADMIN: Access = Access::Kind(UserType::Admin);

fn type_options() -> Vec<(String, String)> {
    UserType::ALL
        .into_iter()
        .filter(|t| *t != UserType::Admin)
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

fn user_filter(user_type: &str, verified: &str, column: UserColumn) -> UserFilter {
    UserFilter {
        user_type: user_type.parse().ok(),
        verified: verified.parse().ok(),
        column,
    }
}

fn arrow(active: bool) -> Option<&'static str> {
    active.then_some("▲")
}

#[component]
pub fn AdminDashboard() -> Element {
    let client = use_client();
    let banner = use_banner();

    let user_type = use_signal(String::new);
    let verified = use_signal(String::new);
    let mut column = use_signal(UserColumn::default);

    let users = use_records(ADMIN, banner, move |client| {
        let filter = user_filter(&user_type(), &verified(), UserColumn::default());
        async move { client.admin().users(&filter).await }
    });
    let census = use_records(ADMIN, banner, |client| async move {
        client.public().census().await
    });
    let activity = use_records(ADMIN, banner, |client| async move {
        client.admin().activity_log().await
    });

    let rows = user_filter(&user_type(), &verified(), column()).apply(&users.rows());

    let verify = {
        let client = client.clone();
        move |user: UserAccount, validation: bool| {
            let verb = if validation { "verified" } else { "unverified" };
            let message = format!("{} {verb}.", user.user_name);
            let client = client.clone();
            users.mutate(banner, message, async move {
                client.admin().verify_user(user.id, validation).await
            });
        }
    };

    let delete = {
        let client = client.clone();
        move |user: UserAccount| {
            let message = format!("{} deleted.", user.user_name);
            let client = client.clone();
            users.mutate(banner, message, async move {
                client.admin().delete_user(user.id).await
            });
        }
    };

    let snapshot = move |_: MouseEvent| {
        let client = client.clone();
        census.mutate(banner, "Census snapshot recorded.", async move {
            client.admin().snapshot_census().await
        });
    };

    let (labels, series) = census_series(&census.rows());

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Admin Dashboard" }
            BannerView { banner }

            section {
                class: "card",
                div {
                    class: "toolbar",
                    h2 { class: "section-title", "Census" }
                    button {
                        class: "btn btn-primary",
                        onclick: snapshot,
                        "Take Census Snapshot"
                    }
                }
                if let Some(text) = census.notice() {
                    Notice { text }
                } else {
                    LineChart { title: "Year-wise Census Trends", labels, series }
                }
            }

            h2 { class: "section-title", "Users" }
            div {
                class: "filters",
                Choice {
                    label: "User type",
                    value: user_type,
                    placeholder: "All user types",
                    options: type_options(),
                }
                Choice {
                    label: "Verification",
                    value: verified,
                    placeholder: "All",
                    options: vec![
                        ("true".to_string(), "Verified".to_string()),
                        ("false".to_string(), "Not verified".to_string()),
                    ],
                }
            }

            if let Some(text) = users.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            SortHeader {
                                label: "User Name",
                                arrow: arrow(column() == UserColumn::UserName),
                                onclick: move |_| column.set(UserColumn::UserName),
                            }
                            SortHeader {
                                label: "Type",
                                arrow: arrow(column() == UserColumn::UserType),
                                onclick: move |_| column.set(UserColumn::UserType),
                            }
                            th { "Email" }
                            th { "Contact" }
                            th { "Verified" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in rows {
                            tr {
                                key: "{user.id}",
                                td { "{user.user_name}" }
                                td { {user.kind().map(|k| k.label().to_string()).unwrap_or_else(|| user.user_type.clone())} }
                                td { "{user.email}" }
                                td { "{user.contact_number}" }
                                td { if user.is_verified { "Yes" } else { "No" } }
                                td {
                                    class: "actions",
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: {
                                            let verify = verify.clone();
                                            let user = user.clone();
                                            move |_| verify(user.clone(), !user.is_verified)
                                        },
                                        if user.is_verified { "Unverify" } else { "Verify" }
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let delete = delete.clone();
                                            let user = user.clone();
                                            move |_| delete(user.clone())
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            h2 { class: "section-title", "Activity Log" }
            if let Some(text) = activity.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Time" }
                            th { "By" }
                            th { "Affected user" }
                            th { "Field" }
                            th { "Old value" }
                            th { "New value" }
                        }
                    }
                    tbody {
                        for entry in activity.rows() {
                            tr {
                                key: "{entry.id}",
                                td { "{entry.time}" }
                                td { "{entry.actor}" }
                                td { "{entry.affected_user}" }
                                td { "{entry.field}" }
                                td { {entry.old_value.clone().unwrap_or_default()} }
                                td { {entry.new_value.clone().unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
