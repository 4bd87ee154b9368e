//! Syntax checks for contact fields.
//!
//! All checks are pure predicates. `check_field` lifts them into the
//! application's error type for callers that validate one field at a time.

use crate::error::{AppError, Result};
use crate::models::ContactField;
use once_cell::sync::Lazy;
use regex::Regex;

// `\d` and `\s` are Unicode-aware in `regex`, so the classes are spelled out.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// True iff `name` is non-empty and made only of ASCII letters and whitespace.
pub fn validate_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// True iff `phone` is exactly ten ASCII digits.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// True iff `email` looks like `local@domain.tld` with a top-level label of two or more letters.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_all(name: &str, phone: &str, email: &str) -> bool {
    validate_name(name) && validate_phone(phone) && validate_email(email)
}

/// Lists which of the three validated fields fail, in field order.
pub fn invalid_fields(name: &str, phone: &str, email: &str) -> Vec<ContactField> {
    let mut fields = Vec::new();
    if !validate_name(name) {
        fields.push(ContactField::Name);
    }
    if !validate_phone(phone) {
        fields.push(ContactField::Phone);
    }
    if !validate_email(email) {
        fields.push(ContactField::Email);
    }
    fields
}

/// Validates a single field value.
///
/// # Errors
///
/// Returns `AppError::FieldRejected` naming the field when the value is invalid.
/// Additional information is free-form and always accepted.
pub fn check_field(field: ContactField, value: &str) -> Result<()> {
    let valid = match field {
        ContactField::Name => validate_name(value),
        ContactField::Phone => validate_phone(value),
        ContactField::Email => validate_email(value),
        ContactField::AdditionalInfo => true,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::FieldRejected(field))
    }
}
