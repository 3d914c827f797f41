//! Contact form field set and submission snapshot

use super::field::{FormField, Validity};
use super::validation::{validate_field, ValidationError};
use crate::messages::Messages;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Options offered by the project type select
pub const PROJECT_TYPES: &[&str] = &[
    "foundation",
    "drainage",
    "excavation",
    "driveway",
    "landscaping",
    "other",
];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The contact form: input fields followed by the submit button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text("name", "Name", true),
                FormField::email("email", "Email", true),
                FormField::tel("phone", "Phone", true),
                FormField::text("address", "Address", false),
                FormField::select("projectType", "Project type", PROJECT_TYPES.to_vec(), false),
                FormField::textarea("description", "Description", false),
                FormField::text("preferredStart", "Preferred start", false),
                FormField::checkbox("siteVisit", "I would like a site visit"),
            ],
            active_field_index: 0,
        }
    }

    /// Look up a field by its form name
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn active_form_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    /// Validate one field and update its annotation
    pub fn blur(&mut self, index: usize, messages: &Messages) -> Result<(), ValidationError> {
        let Some(field) = self.fields.get_mut(index) else {
            return Ok(());
        };
        annotate(field, messages)
    }

    /// Apply an edit to a field. When the edit changed anything, the field's
    /// error annotation is dropped straight away.
    pub fn input(&mut self, index: usize, edit: impl FnOnce(&mut FormField) -> bool) -> bool {
        let Some(field) = self.fields.get_mut(index) else {
            return false;
        };
        let changed = edit(field);
        if changed {
            field.clear_error();
        }
        changed
    }

    /// Move focus forward, validating the field that lost it
    pub fn focus_next(&mut self, messages: &Messages) {
        let previous = self.active_field_index;
        self.next_field();
        // Blur errors surface as annotations only
        let _ = self.blur(previous, messages);
    }

    /// Move focus backward, validating the field that lost it
    pub fn focus_prev(&mut self, messages: &Messages) {
        let previous = self.active_field_index;
        self.prev_field();
        let _ = self.blur(previous, messages);
    }

    /// Validate every field, annotating all failures at once
    pub fn validate_all(&mut self, messages: &Messages) -> Vec<ValidationError> {
        self.fields
            .iter_mut()
            .filter_map(|field| annotate(field, messages).err())
            .collect()
    }

    /// Validate the whole form and, only if every field passes, capture a
    /// snapshot of its values.
    pub fn try_snapshot(
        &mut self,
        messages: &Messages,
    ) -> Result<FormSubmission, Vec<ValidationError>> {
        let errors = self.validate_all(messages);
        if !errors.is_empty() {
            return Err(errors);
        }

        let text = |name: &str| {
            self.field(name)
                .map(|f| f.trimmed().to_string())
                .unwrap_or_default()
        };

        Ok(FormSubmission {
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: text("name"),
            email: text("email"),
            phone: text("phone"),
            address: text("address"),
            project_type: text("projectType"),
            description: text("description"),
            preferred_start: text("preferredStart"),
            want_site_visit: self.field("siteVisit").is_some_and(|f| f.is_checked()),
        })
    }

    /// Clear every field and annotation and return focus to the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.active_field_index = 0;
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.is_invalid())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

fn annotate(field: &mut FormField, messages: &Messages) -> Result<(), ValidationError> {
    match validate_field(field) {
        Ok(()) => {
            field.clear_error();
            Ok(())
        }
        Err(err) => {
            field.validity = Validity::Invalid(messages.validation(err.kind).to_string());
            Err(err)
        }
    }
}

/// Snapshot of the form values taken at submit time.
///
/// Only [`ContactForm::try_snapshot`] builds one, after every field passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    submission_id: Uuid,
    submitted_at: DateTime<Utc>,
    name: String,
    email: String,
    phone: String,
    address: String,
    project_type: String,
    description: String,
    preferred_start: String,
    want_site_visit: bool,
}

impl FormSubmission {
    pub fn submission_id(&self) -> Uuid {
        self.submission_id
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn project_type(&self) -> &str {
        &self.project_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn preferred_start(&self) -> &str {
        &self.preferred_start
    }

    pub fn want_site_visit(&self) -> bool {
        self.want_site_visit
    }
}
