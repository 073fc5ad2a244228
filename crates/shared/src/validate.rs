//! Field validators shared by the contact, inquiry and enrollment forms.
//!
//! Every rule is a pure function of its input. Handlers re-render forms
//! with the collected [`validator::ValidationErrors`] so templates can show
//! per-field messages and clear them as fields are edited.

use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

/// Simple `local@domain.tld` shape. Deliberately not full RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required_error(message: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(message.into())
}

pub fn name_required(value: &str) -> Result<(), ValidationError> {
    if blank(value) {
        return Err(required_error("Name is required"));
    }
    Ok(())
}

pub fn message_required(value: &str) -> Result<(), ValidationError> {
    if blank(value) {
        return Err(required_error("Message is required"));
    }
    Ok(())
}

/// Required plus the `local@domain.tld` shape check, surfaced as two
/// distinct messages the way the form copy words them.
pub fn email_address(value: &str) -> Result<(), ValidationError> {
    if blank(value) {
        return Err(required_error("Email is required"));
    }
    if !EMAIL_PATTERN.is_match(value.trim()) {
        return Err(ValidationError::new("email")
            .with_message("Please enter a valid email address".into()));
    }
    Ok(())
}

pub fn consent_given(value: &bool) -> Result<(), ValidationError> {
    if !value {
        return Err(ValidationError::new("consent")
            .with_message("You must agree to be contacted".into()));
    }
    Ok(())
}

pub fn student_name_required(value: &str) -> Result<(), ValidationError> {
    if blank(value) {
        return Err(required_error("Student name is required"));
    }
    Ok(())
}

pub fn contact_name_required(value: &str) -> Result<(), ValidationError> {
    if blank(value) {
        return Err(required_error("Contact name is required"));
    }
    Ok(())
}

/// First message recorded for a field, for rendering under its input.
pub fn first_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors
        .field_errors()
        .get(field)
        .and_then(|errs| errs.first())
        .and_then(|err| err.message.as_deref())
        .map(str::to_owned)
}

/// Ages come in as free text from a number input; accept 3 through 99.
pub fn student_age(value: &str) -> Result<(), ValidationError> {
    if blank(value) {
        return Err(required_error("Student age is required"));
    }
    match value.trim().parse::<u8>() {
        Ok(age) if (3..=99).contains(&age) => Ok(()),
        _ => Err(ValidationError::new("age").with_message("Please enter a valid age".into())),
    }
}
