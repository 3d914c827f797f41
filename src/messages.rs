//! User-facing strings for the contact form

use crate::state::ValidationErrorKind;
use serde::{Deserialize, Serialize};

/// Language of the form's labels and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Norwegian,
}

/// Localized message catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub required: &'static str,
    pub invalid_email: &'static str,
    pub invalid_phone: &'static str,
    pub submission_success: &'static str,
    pub submission_error: &'static str,
    pub submit_label: &'static str,
    pub loading_label: &'static str,
}

impl Messages {
    pub const ENGLISH: Messages = Messages {
        required: "this field is required",
        invalid_email: "please provide a valid email address",
        invalid_phone: "please provide a valid phone number",
        submission_success: "Thank you for your enquiry! I will get back to you as soon as possible, usually within one working day.",
        submission_error: "Sorry, something went wrong. Please try again or call me directly.",
        submit_label: "Send enquiry",
        loading_label: "Sending...",
    };

    pub const NORWEGIAN: Messages = Messages {
        required: "Dette feltet er påkrevd",
        invalid_email: "Vennligst oppgi en gyldig e-postadresse",
        invalid_phone: "Vennligst oppgi et gyldig telefonnummer",
        submission_success: "Takk for din henvendelse! Jeg vil kontakte deg så snart som mulig, vanligvis innen én arbeidsdag.",
        submission_error: "Beklager, noe gikk galt. Vennligst prøv igjen eller ring meg direkte.",
        submit_label: "Send forespørsel",
        loading_label: "Sender...",
    };

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::ENGLISH,
            Locale::Norwegian => Self::NORWEGIAN,
        }
    }

    /// Inline annotation text for a validation failure
    pub fn validation(&self, kind: ValidationErrorKind) -> &'static str {
        match kind {
            ValidationErrorKind::Required => self.required,
            ValidationErrorKind::InvalidEmail => self.invalid_email,
            ValidationErrorKind::InvalidPhone => self.invalid_phone,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::ENGLISH
    }
}
