//! # Credential rules checked before registration
//!
//! - [`check_password`]: at least 8 characters, every one from `A-Z a-z 0-9`
//!   or `@$!%*?&`, with at least one uppercase letter, one digit and one of
//!   the special characters.
//! - [`check_contact`]: exactly 10 ASCII digits.
//!
//! Both return the message shown under the field on failure.

/// Special characters a password may (and must) draw from.
pub const SPECIALS: &str = "@$!%*?&";

pub const PASSWORD_RULE: &str =
    "Password must be at least 8 chars, with 1 uppercase, 1 digit, and 1 special char.";

pub const CONTACT_RULE: &str = "Contact number must be exactly 10 digits.";

pub fn check_password(password: &str) -> Result<(), &'static str> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || SPECIALS.contains(c);
    let valid = password.chars().count() >= 8
        && password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIALS.contains(c));
    if valid {
        Ok(())
    } else {
        Err(PASSWORD_RULE)
    }
}

pub fn check_contact(contact: &str) -> Result<(), &'static str> {
    if contact.len() == 10 && contact.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CONTACT_RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_accepts_complex() {
        assert!(check_password("Passw0rd!").is_ok());
        assert!(check_password("AAAAAA1@").is_ok());
    }

    #[test]
    fn test_password_rejections() {
        // Too short
        assert!(check_password("Pa0!").is_err());
        // No special character
        assert!(check_password("Password1").is_err());
        // No uppercase
        assert!(check_password("password1!").is_err());
        // No digit
        assert!(check_password("Password!").is_err());
        // Character outside the allowed set
        assert!(check_password("Passw0rd! ").is_err());
        assert!(check_password("Passw0rd#1").is_err());
    }

    #[test]
    fn test_contact_rule() {
        assert!(check_contact("9876543210").is_ok());
        assert_eq!(check_contact("987654321"), Err(CONTACT_RULE));
        assert!(check_contact("98765432100").is_err());
        assert!(check_contact("98765-4321").is_err());
        // Non-ASCII digits are not accepted
        assert!(check_contact("٩٨٧٦٥٤٣٢١٠").is_err());
    }
}
