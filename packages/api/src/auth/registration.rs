//! # Two-step registration
//!
//! ```text
//! BasicInfo --next()--> TypeSpecificInfo --payload() + POST--> Submitted
//!     ^                        |
//!     +--------back()----------+
//! ```
//!
//! Step one collects the common account fields and is gated by the contact and
//! password rules in [`super::password`]. Step two collects the fields of the
//! chosen user type. [`Registration::payload`] builds the body the backend
//! expects for that type and nothing more. Going back keeps every value.

use std::collections::BTreeMap;

use serde::Serialize;

use super::password::{check_contact, check_password};
use crate::roles::{Role, UserType};

/// Field name to message, for inline display under inputs.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    BasicInfo,
    TypeSpecificInfo,
    Submitted,
}

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

pub const QUALIFICATIONS: [&str; 7] = [
    "Illiterate",
    "Primary",
    "Secondary",
    "10th",
    "12th",
    "Graduate",
    "Post-Graduate",
];

/// Everything the two steps collect. Fields of other user types are kept
/// while the user switches types but never sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub user_name: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub user_type: Option<UserType>,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub educational_qualification: String,
    pub occupation: String,
    pub citizen_user_name: String,
    pub role: Option<Role>,
}

/// Body for `POST /user/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistrationPayload {
    #[serde(rename = "User_name")]
    pub user_name: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Contact_number")]
    pub contact_number: String,
    #[serde(rename = "User_type")]
    pub user_type: UserType,
    #[serde(flatten)]
    pub details: TypeDetails,
}

/// The per-type part of the payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeDetails {
    Citizen {
        #[serde(rename = "Date_of_birth")]
        date_of_birth: String,
        #[serde(rename = "Gender")]
        gender: String,
        #[serde(rename = "Address")]
        address: String,
        #[serde(rename = "Educational_qualification")]
        educational_qualification: String,
        #[serde(rename = "Occupation")]
        occupation: String,
    },
    Admin {
        #[serde(rename = "Date_of_birth")]
        date_of_birth: String,
        #[serde(rename = "Gender")]
        gender: String,
        #[serde(rename = "Address")]
        address: String,
    },
    Employee {
        #[serde(rename = "Citizen_user_name")]
        citizen_user_name: String,
        #[serde(rename = "Role")]
        role: Role,
    },
    Agency {
        #[serde(rename = "Role")]
        role: Role,
    },
}

/// Registration state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registration {
    pub form: RegistrationForm,
    step: Step,
    errors: FieldErrors,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Validate step one and advance. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if self.step != Step::BasicInfo {
            return false;
        }
        self.errors = validate_basic(&self.form);
        if self.errors.is_empty() {
            self.step = Step::TypeSpecificInfo;
            true
        } else {
            false
        }
    }

    /// Return to step one, keeping everything entered.
    pub fn back(&mut self) {
        if self.step == Step::TypeSpecificInfo {
            self.step = Step::BasicInfo;
            self.errors.clear();
        }
    }

    /// Validate step two and build the payload for the chosen type.
    pub fn payload(&mut self) -> Option<RegistrationPayload> {
        if self.step != Step::TypeSpecificInfo {
            return None;
        }
        match build_payload(&self.form) {
            Ok(payload) => {
                self.errors.clear();
                Some(payload)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// The backend accepted the payload.
    pub fn mark_submitted(&mut self) {
        if self.step == Step::TypeSpecificInfo {
            self.step = Step::Submitted;
        }
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
    }
}

fn validate_basic(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "User_name", &form.user_name, "Username is required.");
    require(&mut errors, "Name", &form.name, "Name is required.");
    if !form.email.contains('@') {
        errors.insert("Email", "Enter a valid email address.".to_string());
    }
    if let Err(message) = check_contact(&form.contact_number) {
        errors.insert("Contact_number", message.to_string());
    }
    if let Err(message) = check_password(&form.password) {
        errors.insert("Password", message.to_string());
    }
    if form.user_type.is_none() {
        errors.insert("User_type", "Select a user type.".to_string());
    }
    errors
}

fn build_payload(form: &RegistrationForm) -> Result<RegistrationPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    let Some(user_type) = form.user_type else {
        errors.insert("User_type", "Select a user type.".to_string());
        return Err(errors);
    };

    let role = form.role.filter(|r| user_type.roles().contains(r));
    if !user_type.roles().is_empty() && role.is_none() {
        errors.insert("Role", "Select a role.".to_string());
    }

    match user_type {
        UserType::Citizen => {
            require(&mut errors, "Date_of_birth", &form.date_of_birth, "Date of birth is required.");
            require(&mut errors, "Gender", &form.gender, "Select a gender.");
            require(&mut errors, "Address", &form.address, "Address is required.");
            require(
                &mut errors,
                "Educational_qualification",
                &form.educational_qualification,
                "Select a qualification.",
            );
            require(&mut errors, "Occupation", &form.occupation, "Occupation is required.");
        }
        UserType::Admin => {
            require(&mut errors, "Date_of_birth", &form.date_of_birth, "Date of birth is required.");
            require(&mut errors, "Gender", &form.gender, "Select a gender.");
            require(&mut errors, "Address", &form.address, "Address is required.");
        }
        UserType::PanchayatEmployee => {
            require(
                &mut errors,
                "Citizen_user_name",
                &form.citizen_user_name,
                "Your citizen username is required.",
            );
        }
        UserType::GovernmentAgency => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let details = match (user_type, role) {
        (UserType::Citizen, _) => TypeDetails::Citizen {
            date_of_birth: form.date_of_birth.trim().to_string(),
            gender: form.gender.clone(),
            address: form.address.trim().to_string(),
            educational_qualification: form.educational_qualification.clone(),
            occupation: form.occupation.trim().to_string(),
        },
        (UserType::Admin, _) => TypeDetails::Admin {
            date_of_birth: form.date_of_birth.trim().to_string(),
            gender: form.gender.clone(),
            address: form.address.trim().to_string(),
        },
        (UserType::PanchayatEmployee, Some(role)) => TypeDetails::Employee {
            citizen_user_name: form.citizen_user_name.trim().to_string(),
            role,
        },
        (UserType::GovernmentAgency, Some(role)) => TypeDetails::Agency { role },
        (_, None) => {
            errors.insert("Role", "Select a role.".to_string());
            return Err(errors);
        }
    };

    Ok(RegistrationPayload {
        user_name: form.user_name.trim().to_string(),
        password: form.password.clone(),
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        contact_number: form.contact_number.clone(),
        user_type,
        details,
    })
}
