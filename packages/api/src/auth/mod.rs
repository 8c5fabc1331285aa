//! Sign-up and sign-in flows.

mod login;
pub mod password;
pub mod registration;

pub use login::Credentials;
pub use registration::{
    FieldErrors, Registration, RegistrationForm, RegistrationPayload, Step, TypeDetails, GENDERS,
    QUALIFICATIONS,
};
