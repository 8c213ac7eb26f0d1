// ABOUTME: Contact form validation: required trimmed name plus a plausible email,
// ABOUTME: phone and special requests stay optional

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// local@domain.tld shape, no whitespace or extra @ anywhere.
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// First failure wins: name before email. Values are trimmed for the
/// checks only; callers keep the raw text.
pub fn validate_contact(name: &str, email: &str) -> Result<(), ContactError> {
    if name.trim().is_empty() {
        return Err(ContactError::MissingName);
    }
    let email = email.trim();
    if email.is_empty() || !is_valid_email(email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

/// Empty optional form fields become null on the wire.
pub fn optional_field(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_name_fails_first() {
        assert_eq!(
            validate_contact("", "a@b.co"),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            validate_contact("   ", "not-an-email"),
            Err(ContactError::MissingName)
        );
    }

    #[test]
    fn test_bad_email_fails_after_name() {
        assert_eq!(
            validate_contact("Ana", "not-an-email"),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(
            validate_contact("Ana", "missing@tld"),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(
            validate_contact("Ana", "two@@signs.com"),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(validate_contact("Ana", ""), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_plausible_contact_passes() {
        assert_eq!(validate_contact("Ana", "a@b.co"), Ok(()));
        assert_eq!(validate_contact("  Ana  ", " ana@studio.example "), Ok(()));
    }

    #[test]
    fn test_error_messages_name_the_field() {
        assert_eq!(
            ContactError::MissingName.to_string(),
            "Please enter your full name."
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_optional_fields_map_empty_to_none() {
        assert_eq!(optional_field(""), None);
        assert_eq!(optional_field("555-0100"), Some("555-0100".to_string()));
    }
}
