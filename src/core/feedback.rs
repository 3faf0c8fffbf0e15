//! Citizen feedback form - field state and validation

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "Enter your email",
            Self::Message => "Share your feedback, suggestions, or report issues...",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Name => "👤",
            Self::Email => "✉",
            Self::Message => "💬",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-entered form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Message => self.message.as_deref(),
        }
    }

    fn slot(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self, field: FormField) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Populated fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|msg| (f, msg)))
    }
}

/// Check every field and collect the messages
pub fn validate_form(data: &FormData) -> FormErrors {
    FormErrors {
        name: validate_name(&data.name),
        email: validate_email(&data.email),
        message: validate_message(&data.message),
    }
}

fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Some("Name is required".to_string())
    } else if trimmed.chars().count() < 2 {
        Some("Name must be at least 2 characters".to_string())
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !EMAIL_RE.is_match(email) {
        Some("Please enter a valid email".to_string())
    } else {
        None
    }
}

fn validate_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Some("Message is required".to_string())
    } else if trimmed.chars().count() < 10 {
        Some("Message must be at least 10 characters".to_string())
    } else {
        None
    }
}

/// Where the form currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    ShowingErrors,
    Confirmation,
}

/// State owned by the Feedback view
#[derive(Debug, Clone, Default)]
pub struct FeedbackState {
    data: FormData,
    errors: FormErrors,
    focused: Option<FormField>,
    show_confirmation: bool,
}

impl FeedbackState {
    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        if self.show_confirmation {
            FormPhase::Confirmation
        } else if !self.errors.is_empty() {
            FormPhase::ShowingErrors
        } else {
            FormPhase::Editing
        }
    }

    pub fn is_confirmation_open(&self) -> bool {
        self.show_confirmation
    }

    /// Replace a field's value; a pending error on that field goes away
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.data.get_mut(field) = value.into();
        if self.errors.get(field).is_some() {
            self.errors.clear(field);
        }
    }

    /// Validate and, when clean, show the confirmation with a fresh form.
    /// Returns whether the submission went through.
    pub fn submit(&mut self) -> bool {
        let errors = validate_form(&self.data);
        if errors.is_empty() {
            log::info!("Feedback submitted");
            self.show_confirmation = true;
            self.data = FormData::default();
            self.errors = FormErrors::default();
            self.focused = Some(FormField::Name);
            true
        } else {
            log::debug!(
                "Feedback rejected: {} field(s) invalid",
                errors.iter().count()
            );
            self.errors = errors;
            false
        }
    }

    pub fn close_confirmation(&mut self) {
        self.show_confirmation = false;
    }

    // Keyboard editing on top of set_field

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn focus(&mut self, field: Option<FormField>) {
        self.focused = field;
    }

    pub fn focus_next(&mut self) {
        self.focused = Some(self.focused.map_or(FormField::Name, |f| f.next()));
    }

    pub fn focus_prev(&mut self) {
        self.focused = Some(self.focused.map_or(FormField::Message, |f| f.prev()));
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.focused {
            let mut value = self.data.get(field).to_string();
            value.push(c);
            self.set_field(field, value);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.focused {
            let mut value = self.data.get(field).to_string();
            if value.pop().is_some() {
                self.set_field(field, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty_requires_everything() {
        let errors = validate_form(&FormData::default());
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let errors = validate_form(&FormData::new("   ", " \t", "\n"));
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn test_too_short_and_malformed() {
        let errors = validate_form(&FormData::new("A", "bad", "short"));
        assert_eq!(errors.name.as_deref(), Some("Name must be at least 2 characters"));
        assert_eq!(errors.email.as_deref(), Some("Please enter a valid email"));
        assert_eq!(
            errors.message.as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_valid_form() {
        let errors = validate_form(&FormData::new("Alice", "a@b.co", "This is long enough."));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_pattern() {
        let check = |email: &str| validate_email(email).is_none();
        assert!(check("first.last@city.gov"));
        assert!(!check("a@b"));
        assert!(!check("a b@c.d"));
        assert!(!check("a@@b.c"));
        assert!(!check(" a@b.co"));
    }

    #[test]
    fn test_lengths_use_trimmed_chars() {
        assert!(validate_name(" Al ").is_none());
        assert!(validate_name("É").is_some());
        assert!(validate_message("  123456789  ").is_some());
        assert!(validate_message("ünïcödé ok").is_none());
    }

    #[test]
    fn test_submit_valid_resets_and_confirms() {
        let mut form = FeedbackState::default();
        form.set_field(FormField::Name, "Alice");
        form.set_field(FormField::Email, "a@b.co");
        form.set_field(FormField::Message, "This is long enough.");

        assert!(form.submit());
        assert_eq!(form.phase(), FormPhase::Confirmation);
        assert!(form.data().is_empty());
        assert!(form.errors().is_empty());

        form.close_confirmation();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.data().is_empty());
    }

    #[test]
    fn test_submit_invalid_keeps_data() {
        let mut form = FeedbackState::default();
        form.set_field(FormField::Name, "A");

        assert!(!form.submit());
        assert_eq!(form.phase(), FormPhase::ShowingErrors);
        assert_eq!(form.data().name, "A");
        assert_eq!(form.errors().iter().count(), 3);
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut form = FeedbackState::default();
        form.submit();

        form.set_field(FormField::Email, "x");
        assert!(form.errors().email.is_none());
        assert!(form.errors().name.is_some());
        assert!(form.errors().message.is_some());
    }

    #[test]
    fn test_keystrokes_edit_focused_field() {
        let mut form = FeedbackState::default();
        form.push_char('x');
        assert!(form.data().is_empty());

        form.focus_next();
        assert_eq!(form.focused(), Some(FormField::Name));
        "Bob".chars().for_each(|c| form.push_char(c));
        form.pop_char();
        assert_eq!(form.data().name, "Bo");

        form.focus_prev();
        assert_eq!(form.focused(), Some(FormField::Message));
    }
}
