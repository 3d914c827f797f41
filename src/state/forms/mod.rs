//! Form domain layer
//!
//! Field value objects, validation rules and the contact form field set.

mod field;
mod form_state;
mod validation;

pub use field::{FieldKind, FieldValue, FormField, Validity};
pub use form_state::{ContactForm, Form, FormSubmission, PROJECT_TYPES};
pub use validation::{
    is_valid_email, is_valid_phone, validate_field, ValidationError, ValidationErrorKind,
};
