use api::models::{
    EnrollmentDecision, EnrollmentFilter, EnrollmentStatus, SchemeFilter, WelfareEnrollment,
};
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::{Choice, Field};
use crate::records::{use_records, Notice};

const ACCESS: Access = Access::employee(Role::WelfareScheme);

// Both tables re-apply the filters sent to the backend to the rows it returns.

fn scheme_filter(scheme_name: &str, by_deadline: bool) -> SchemeFilter {
    SchemeFilter {
        name: scheme_name.to_string(),
        by_deadline,
    }
}

fn enrollment_filter(scheme_name: &str, status: &str) -> EnrollmentFilter {
    EnrollmentFilter {
        scheme_name: scheme_name.to_string(),
        status: EnrollmentStatus::parse(status),
    }
}

#[component]
pub fn EmployeeWelfare() -> Element {
    let client = use_client();
    let banner = use_banner();

    let scheme_name = use_signal(String::new);
    let status = use_signal(String::new);
    let mut by_deadline = use_signal(|| false);

    let schemes = use_records(ACCESS, banner, move |client| {
        let name = scheme_name();
        async move { client.employee().welfare_schemes(&name).await }
    });
    let enrollments = use_records(ACCESS, banner, move |client| {
        let name = scheme_name();
        let status = EnrollmentStatus::parse(&status());
        async move { client.employee().enrollments(&name, status).await }
    });

    let scheme_rows = scheme_filter(&scheme_name(), by_deadline()).apply(&schemes.rows());
    let enrollment_rows = enrollment_filter(&scheme_name(), &status()).apply(&enrollments.rows());

    let decide = move |enrollment: WelfareEnrollment, status: EnrollmentStatus| {
        let decision = EnrollmentDecision::for_enrollment(&enrollment, status);
        let message = format!(
            "{} {} for {}.",
            enrollment.scheme_name,
            status.label().to_lowercase(),
            enrollment.user_name
        );
        let client = client.clone();
        enrollments.mutate(banner, message, async move {
            client.employee().decide_enrollment(&decision).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Welfare Schemes" }
            BannerView { banner }

            div {
                class: "filters",
                Field { label: "Scheme name", value: scheme_name }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: by_deadline(),
                        onchange: move |evt: FormEvent| by_deadline.set(evt.checked()),
                    }
                    "Sort by deadline"
                }
            }

            if let Some(text) = schemes.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Scheme" }
                            th { "Description" }
                            th { "Deadline" }
                        }
                    }
                    tbody {
                        for scheme in scheme_rows {
                            tr {
                                key: "{scheme.id}",
                                td { "{scheme.name}" }
                                td { "{scheme.description}" }
                                td { "{scheme.deadline}" }
                            }
                        }
                    }
                }
            }

            h2 { class: "section-title", "Enrollments" }
            div {
                class: "filters",
                Choice {
                    label: "Status",
                    value: status,
                    placeholder: "All",
                    options: EnrollmentStatus::ALL
                        .iter()
                        .map(|s| (s.as_str().to_string(), s.label().to_string()))
                        .collect::<Vec<_>>(),
                }
            }

            if let Some(text) = enrollments.notice() {
                Notice { text }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Citizen" }
                            th { "Scheme" }
                            th { "Status" }
                            th { "Decision" }
                        }
                    }
                    tbody {
                        for enrollment in enrollment_rows {
                            tr {
                                key: "{enrollment.citizen_id}-{enrollment.scheme_id}",
                                td { "{enrollment.user_name}" }
                                td { "{enrollment.scheme_name}" }
                                td { "{enrollment.status}" }
                                td {
                                    class: "actions",
                                    button {
                                        class: "btn btn-primary",
                                        onclick: {
                                            let decide = decide.clone();
                                            let enrollment = enrollment.clone();
                                            move |_| decide(enrollment.clone(), EnrollmentStatus::Approved)
                                        },
                                        "Approve"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let decide = decide.clone();
                                            let enrollment = enrollment.clone();
                                            move |_| decide(enrollment.clone(), EnrollmentStatus::Rejected)
                                        },
                                        "Reject"
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

#[cfg(test)]
mod tests {
    use api::models::WelfareScheme;

    use super::*;

    #[test]
    fn test_scheme_name_narrows_loaded_schemes() {
        let rows = vec![
            WelfareScheme {
                id: 1,
                name: "Health Insurance".into(),
                ..WelfareScheme::default()
            },
            WelfareScheme {
                id: 2,
                name: "Educational Grant".into(),
                ..WelfareScheme::default()
            },
        ];
        let ids: Vec<i64> = scheme_filter("Health", false).apply(&rows).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_enrollment_table_follows_filters() {
        let enrollment = |user: &str, scheme: &str, status: EnrollmentStatus| WelfareEnrollment {
            user_name: user.into(),
            scheme_name: scheme.into(),
            status,
            ..WelfareEnrollment::default()
        };
        let rows = vec![
            enrollment("john_doe", "Health Insurance", EnrollmentStatus::Pending),
            enrollment("jane_doe", "Health Insurance", EnrollmentStatus::Approved),
            enrollment("ravi", "Educational Grant", EnrollmentStatus::Pending),
        ];

        let users = |filter: EnrollmentFilter| -> Vec<String> {
            filter.apply(&rows).into_iter().map(|e| e.user_name).collect()
        };
        assert_eq!(users(enrollment_filter("", "")).len(), 3);
        assert_eq!(users(enrollment_filter("health", "")), vec!["john_doe", "jane_doe"]);
        assert_eq!(users(enrollment_filter("health", "PENDING")), vec!["john_doe"]);
        assert_eq!(users(enrollment_filter("", "REJECTED")), Vec::<String>::new());
    }
}
