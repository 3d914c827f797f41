//! Field validation rules

use super::field::{FieldKind, FormField};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Form input treats U+FEFF as whitespace; `\s` in `regex` does not
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\s\x{FEFF}+\-()]{8,}$").expect("phone pattern is a valid regex")
});

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("this field is required")]
    Required,
    #[error("please provide a valid email address")]
    InvalidEmail,
    #[error("please provide a valid phone number")]
    InvalidPhone,
}

/// A field-level validation failure, surfaced inline next to the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Check a single field against its rules.
///
/// Format checks only apply to non-empty values, so an empty optional
/// email or phone field is valid.
pub fn validate_field(field: &FormField) -> Result<(), ValidationError> {
    let fail = |kind| {
        Err(ValidationError {
            field: field.name,
            kind,
        })
    };

    let value = field.trimmed();
    let empty = match field.kind {
        FieldKind::Checkbox => !field.is_checked(),
        _ => value.is_empty(),
    };

    if field.required && empty {
        return fail(ValidationErrorKind::Required);
    }
    if empty {
        return Ok(());
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => fail(ValidationErrorKind::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => fail(ValidationErrorKind::InvalidPhone),
        _ => Ok(()),
    }
}
