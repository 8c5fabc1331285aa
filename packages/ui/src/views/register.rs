use api::auth::{Registration, RegistrationForm, Step, GENDERS, QUALIFICATIONS};
use api::auth::password::PASSWORD_RULE;
use api::UserType;
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::{Choice, Field};

/// One signal per text input. Copied into the [`RegistrationForm`] before each
/// transition so the state machine sees what is on screen.
#[derive(Clone, Copy)]
struct Inputs {
    user_name: Signal<String>,
    password: Signal<String>,
    name: Signal<String>,
    email: Signal<String>,
    contact_number: Signal<String>,
    user_type: Signal<String>,
    date_of_birth: Signal<String>,
    gender: Signal<String>,
    address: Signal<String>,
    educational_qualification: Signal<String>,
    occupation: Signal<String>,
    citizen_user_name: Signal<String>,
    role: Signal<String>,
}

impl Inputs {
    fn new() -> Self {
        let text = || Signal::new(String::new());
        Self {
            user_name: text(),
            password: text(),
            name: text(),
            email: text(),
            contact_number: text(),
            user_type: text(),
            date_of_birth: text(),
            gender: text(),
            address: text(),
            educational_qualification: text(),
            occupation: text(),
            citizen_user_name: text(),
            role: text(),
        }
    }

    fn fill(&self, form: &mut RegistrationForm) {
        form.user_name = (self.user_name)().trim().to_string();
        form.password = (self.password)();
        form.name = (self.name)().trim().to_string();
        form.email = (self.email)().trim().to_string();
        form.contact_number = (self.contact_number)().trim().to_string();
        form.user_type = (self.user_type)().parse().ok();
        form.date_of_birth = (self.date_of_birth)();
        form.gender = (self.gender)();
        form.address = (self.address)().trim().to_string();
        form.educational_qualification = (self.educational_qualification)();
        form.occupation = (self.occupation)().trim().to_string();
        form.citizen_user_name = (self.citizen_user_name)().trim().to_string();
        form.role = (self.role)().parse().ok();
    }
}

fn pairs(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

fn type_options() -> Vec<(String, String)> {
    UserType::ALL
        .into_iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

fn role_options(user_type: Option<UserType>) -> Vec<(String, String)> {
    user_type
        .map(UserType::roles)
        .unwrap_or_default()
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect()
}

#[component]
pub fn Register() -> Element {
    let client = use_client();
    let mut banner = use_banner();
    let mut registration = use_signal(Registration::new);
    let inputs = use_hook(Inputs::new);
    let mut busy = use_signal(|| false);

    let next = move |evt: FormEvent| {
        evt.prevent_default();
        let mut reg = registration.write();
        inputs.fill(&mut reg.form);
        reg.next();
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let payload = {
            let mut reg = registration.write();
            inputs.fill(&mut reg.form);
            reg.payload()
        };
        let Some(payload) = payload else {
            return;
        };
        busy.set(true);
        let client = client.clone();
        spawn(async move {
            match client.register(&payload).await {
                Ok(()) => {
                    tracing::info!("Registered {}", payload.user_name);
                    registration.write().mark_submitted();
                    banner.success("Registration complete. You can now sign in.");
                }
                Err(e) => banner.failure(&e),
            }
            busy.set(false);
        });
    };

    let step = registration.read().step();
    let error = move |field: &str| {
        registration
            .read()
            .errors()
            .get(field)
            .cloned()
            .unwrap_or_default()
    };
    let user_type: Option<UserType> = (inputs.user_type)().parse().ok();
    let type_label = user_type.map(UserType::label).unwrap_or_default();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card auth-card",
                h2 { "Sign Up" }
                BannerView { banner }
                match step {
                    Step::BasicInfo => rsx! {
                        form {
                            onsubmit: next,
                            p { class: "muted", "Step 1 of 2: account details" }
                            Field { label: "Username", value: inputs.user_name, error: error("User_name") }
                            Field {
                                label: "Password",
                                value: inputs.password,
                                r#type: "password",
                                placeholder: PASSWORD_RULE,
                                error: error("Password"),
                            }
                            Field { label: "Full name", value: inputs.name, error: error("Name") }
                            Field { label: "Email", value: inputs.email, r#type: "email", error: error("Email") }
                            Field {
                                label: "Contact number",
                                value: inputs.contact_number,
                                r#type: "tel",
                                error: error("Contact_number"),
                            }
                            Choice {
                                label: "User type",
                                value: inputs.user_type,
                                options: type_options(),
                                error: error("User_type"),
                            }
                            button { class: "btn btn-primary", r#type: "submit", "Next" }
                        }
                    },
                    Step::TypeSpecificInfo => rsx! {
                        form {
                            onsubmit: submit,
                            p { class: "muted", "Step 2 of 2: {type_label} details" }
                            match user_type {
                                Some(UserType::Citizen) | Some(UserType::Admin) => rsx! {
                                    Field {
                                        label: "Date of birth",
                                        value: inputs.date_of_birth,
                                        r#type: "date",
                                        error: error("Date_of_birth"),
                                    }
                                    Choice {
                                        label: "Gender",
                                        value: inputs.gender,
                                        options: pairs(&GENDERS),
                                        error: error("Gender"),
                                    }
                                    Field { label: "Address", value: inputs.address, error: error("Address") }
                                    if user_type == Some(UserType::Citizen) {
                                        Choice {
                                            label: "Educational qualification",
                                            value: inputs.educational_qualification,
                                            options: pairs(&QUALIFICATIONS),
                                            error: error("Educational_qualification"),
                                        }
                                        Field { label: "Occupation", value: inputs.occupation, error: error("Occupation") }
                                    }
                                },
                                Some(UserType::PanchayatEmployee) => rsx! {
                                    Field {
                                        label: "Your citizen username",
                                        value: inputs.citizen_user_name,
                                        error: error("Citizen_user_name"),
                                    }
                                    Choice {
                                        label: "Role",
                                        value: inputs.role,
                                        options: role_options(user_type),
                                        error: error("Role"),
                                    }
                                },
                                Some(UserType::GovernmentAgency) => rsx! {
                                    Choice {
                                        label: "Role",
                                        value: inputs.role,
                                        options: role_options(user_type),
                                        error: error("Role"),
                                    }
                                },
                                None => rsx! {},
                            }
                            div {
                                class: "form-actions",
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| registration.write().back(),
                                    "Back"
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "submit",
                                    disabled: busy(),
                                    if busy() { "Submitting..." } else { "Register" }
                                }
                            }
                        }
                    },
                    Step::Submitted => rsx! {
                        p { "Your account has been created." }
                        Link { class: "btn btn-primary", to: "/signin", "Go to Sign In" }
                    },
                }
                if step != Step::Submitted {
                    p {
                        class: "muted",
                        "Already registered? "
                        Link { to: "/signin", "Sign in" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::Role;

    use super::*;

    #[test]
    fn test_role_options_follow_user_type() {
        assert!(role_options(None).is_empty());
        assert!(role_options(Some(UserType::Citizen)).is_empty());
        assert_eq!(role_options(Some(UserType::PanchayatEmployee)).len(), Role::EMPLOYEE.len());
        let agency = role_options(Some(UserType::GovernmentAgency));
        assert_eq!(
            agency,
            vec![
                ("WELFARE_SCHEME".to_string(), "Welfare Manager".to_string()),
                ("INFRASTRUCTURE".to_string(), "Infrastructure Manager".to_string()),
            ]
        );
    }
}
