//! Field-level validation helpers shared by the entity rule modules.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::error::CoreError;

/// Phone numbers may contain digits, spaces, `+`, `-` and parentheses.
static PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("phone regex is valid"));

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 8;

/// Ensure a required text field is present and not blank.
///
/// Returns the trimmed value.
pub fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Reject text longer than `max` characters.
pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate an email address (`local@domain.tld`).
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() || !email.rsplit('@').next().is_some_and(|d| d.contains('.')) {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate a phone number: allowed characters only, at least
/// [`MIN_PHONE_DIGITS`] digits.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !PHONE_CHARS.is_match(phone) || digits < MIN_PHONE_DIGITS {
        return Err(CoreError::Validation(format!(
            "'{phone}' is not a valid phone number"
        )));
    }
    Ok(())
}

/// Normalise an optional free-text field: trim, and map blank to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("name", Some("  Alice ")).unwrap(), "Alice");
    }

    #[test]
    fn require_text_rejects_missing_and_blank() {
        assert!(require_text("name", None).is_err());
        assert!(require_text("name", Some("   ")).is_err());
    }

    #[test]
    fn email_valid() {
        assert!(validate_email("alice@x.com").is_ok());
    }

    #[test]
    fn email_without_tld_rejected() {
        assert!(validate_email("alice@localhost").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn phone_valid_formats() {
        assert!(validate_phone("+965 1234 5678").is_ok());
        assert!(validate_phone("(965) 1234-5678").is_ok());
    }

    #[test]
    fn phone_too_short_or_bad_chars_rejected() {
        assert!(validate_phone("123 45").is_err());
        assert!(validate_phone("call me 12345678").is_err());
    }

    #[test]
    fn optional_text_maps_blank_to_none() {
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(Some(" Acme ")), Some("Acme".to_string()));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn max_length_counts_chars() {
        assert!(max_length("title", "abc", 3).is_ok());
        assert!(max_length("title", "abcd", 3).is_err());
    }
}
