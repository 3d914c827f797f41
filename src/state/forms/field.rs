//! Form field value objects

/// Kind of input a field represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    /// Single choice from a fixed option list
    Select(Vec<&'static str>),
    Checkbox,
    /// Multi-line free text
    Textarea,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// Validity annotation shown next to a field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Valid,
    Invalid(String),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue,
    pub validity: Validity,
}

impl FormField {
    fn new(name: &'static str, label: &str, kind: FieldKind, required: bool) -> Self {
        let value = match kind {
            FieldKind::Checkbox => FieldValue::Checked(false),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name,
            label: label.to_string(),
            kind,
            required,
            value,
            validity: Validity::Valid,
        }
    }

    /// Create a single-line text field
    pub fn text(name: &'static str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required)
    }

    /// Create an email field
    pub fn email(name: &'static str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Email, required)
    }

    /// Create a phone number field
    pub fn tel(name: &'static str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Tel, required)
    }

    /// Create a select field; the empty value means "nothing chosen"
    pub fn select(
        name: &'static str,
        label: &str,
        options: Vec<&'static str>,
        required: bool,
    ) -> Self {
        Self::new(name, label, FieldKind::Select(options), required)
    }

    /// Create a checkbox field
    pub fn checkbox(name: &'static str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Checkbox, false)
    }

    /// Create a multi-line text field
    pub fn textarea(name: &'static str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Textarea, required)
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Textarea
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.validity, Validity::Invalid(_))
    }

    /// The inline error message, if the field is annotated
    pub fn error_message(&self) -> Option<&str> {
        match &self.validity {
            Validity::Invalid(msg) => Some(msg),
            Validity::Valid => None,
        }
    }

    /// Get the raw text value (empty for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Text value with surrounding whitespace removed. The byte order mark
    /// counts as whitespace here, as it does for browser form input.
    pub fn trimmed(&self) -> &str {
        let is_blank = |c: char| c.is_whitespace() || c == '\u{FEFF}';
        self.as_text().trim_matches(is_blank)
    }

    /// Get the checkbox state (false for text fields)
    pub fn is_checked(&self) -> bool {
        match self.value {
            FieldValue::Checked(c) => c,
            FieldValue::Text(_) => false,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    /// Push a character to the field value.
    ///
    /// Select and checkbox fields do not accept typed characters.
    pub fn push_char(&mut self, c: char) -> bool {
        match (&self.kind, &mut self.value) {
            (FieldKind::Select(_) | FieldKind::Checkbox, _) => false,
            (FieldKind::Textarea, FieldValue::Text(s)) => {
                s.push(c);
                true
            }
            (_, FieldValue::Text(s)) => {
                if c == '\n' {
                    return false;
                }
                s.push(c);
                true
            }
            (_, FieldValue::Checked(_)) => false,
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        match (&self.kind, &mut self.value) {
            (FieldKind::Select(_) | FieldKind::Checkbox, _) => false,
            (_, FieldValue::Text(s)) => s.pop().is_some(),
            (_, FieldValue::Checked(_)) => false,
        }
    }

    /// Flip a checkbox. Returns false for any other kind.
    pub fn toggle(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Checked(c) => {
                *c = !*c;
                true
            }
            FieldValue::Text(_) => false,
        }
    }

    /// Step through select options; wraps around through the empty choice
    pub fn cycle_option(&mut self, forward: bool) -> bool {
        let FieldKind::Select(options) = &self.kind else {
            return false;
        };
        if options.is_empty() {
            return false;
        }

        // Position 0 is the empty choice, options follow from 1
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|o| *o == self.as_text())
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let value = if next == 0 { "" } else { options[next - 1] };
        self.set_text(value);
        true
    }

    /// Drop any error annotation without re-validating
    pub fn clear_error(&mut self) {
        self.validity = Validity::Valid;
    }

    /// Reset value and annotation to their initial state
    pub fn reset(&mut self) {
        self.value = match self.kind {
            FieldKind::Checkbox => FieldValue::Checked(false),
            _ => FieldValue::Text(String::new()),
        };
        self.validity = Validity::Valid;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match (&self.kind, &self.value) {
            (FieldKind::Checkbox, FieldValue::Checked(true)) => "[x]".to_string(),
            (FieldKind::Checkbox, _) => "[ ]".to_string(),
            (FieldKind::Select(_), FieldValue::Text(s)) if s.is_empty() => "< choose >".to_string(),
            (FieldKind::Select(_), FieldValue::Text(s)) => format!("< {s} >"),
            (_, FieldValue::Text(s)) => s.clone(),
            (_, FieldValue::Checked(_)) => String::new(),
        }
    }
}
