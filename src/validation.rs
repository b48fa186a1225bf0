//! Validation rules for ticket and credential forms
//!
//! Pure, synchronous, deterministic functions over raw form input. Each
//! returns a [`ValidationErrors`] mapping field names to messages; an empty
//! mapping means the form is valid. Callers run these both per keystroke
//! (live error display) and as the pre-submit gate; the write path itself
//! never rejects on content validity.

use crate::core::{Status, TicketDraft};
use crate::error::{Result, TicketaError};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum allowed description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Minimum allowed password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name to message mapping; ordered for deterministic output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for a field, if it failed a rule
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when empty, otherwise a [`TicketaError::Validation`]
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(TicketaError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Raw ticket form input, as typed by the user. Status is still a free
/// string here; it only becomes a [`Status`] once validated.
#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
}

impl TicketForm {
    /// Convert a validated form into a draft ready for the repository.
    /// Empty optional fields become `None`.
    pub fn into_draft(self) -> Result<TicketDraft> {
        let status: Status = self.status.parse()?;
        Ok(TicketDraft {
            title: self.title,
            description: (!self.description.is_empty()).then_some(self.description),
            status,
            priority: (!self.priority.is_empty()).then_some(self.priority),
        })
    }
}

/// Raw signup form input
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Raw login form input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Check ticket field constraints
pub fn validate_ticket(form: &TicketForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if form.title.trim().is_empty() {
        errors.insert("title", "Title is required");
    }
    if form.status.parse::<Status>().is_err() {
        errors.insert("status", "Status must be open, in_progress, or closed");
    }
    if form.description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.insert("description", "Description too long");
    }
    errors
}

/// Check signup field constraints
pub fn validate_signup(form: &SignupForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if form.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }
    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    }
    if form.password.trim().is_empty() {
        errors.insert("password", "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }
    errors
}

/// Check login field constraints
pub fn validate_login(form: &LoginForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    }
    if form.password.trim().is_empty() {
        errors.insert("password", "Password is required");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_form(title: &str, status: &str) -> TicketForm {
        TicketForm {
            title: title.to_string(),
            status: status.to_string(),
            ..TicketForm::default()
        }
    }

    #[test]
    fn test_empty_title_rejected() {
        let errors = validate_ticket(&ticket_form("", "open"));
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let errors = validate_ticket(&ticket_form("   ", "open"));
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn test_bogus_status_rejected() {
        let errors = validate_ticket(&ticket_form("x", "bogus"));
        assert_eq!(
            errors.get("status"),
            Some("Status must be open, in_progress, or closed")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_long_description_rejected() {
        let mut form = ticket_form("x", "open");
        form.description = "a".repeat(MAX_DESCRIPTION_LEN + 1);
        let errors = validate_ticket(&form);
        assert_eq!(errors.get("description"), Some("Description too long"));
    }

    #[test]
    fn test_description_at_limit_accepted() {
        let mut form = ticket_form("x", "open");
        form.description = "a".repeat(MAX_DESCRIPTION_LEN);
        assert!(validate_ticket(&form).is_empty());
    }

    #[test]
    fn test_valid_ticket_has_no_errors() {
        assert!(validate_ticket(&ticket_form("x", "open")).is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut form = ticket_form("", "bogus");
        form.description = "a".repeat(MAX_DESCRIPTION_LEN + 1);
        let first = validate_ticket(&form);
        let second = validate_ticket(&form);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_signup_requires_all_fields() {
        let errors = validate_signup(&SignupForm::default());
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_short_password_rejected() {
        let form = SignupForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "12345".to_string(),
        };
        let errors = validate_signup(&form);
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_login_requires_fields() {
        let errors = validate_login(&LoginForm::default());
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(validate_login(&form).is_empty());
    }

    #[test]
    fn test_form_into_draft() {
        let form = TicketForm {
            title: "Fix login bug".to_string(),
            description: String::new(),
            status: "in_progress".to_string(),
            priority: "high".to_string(),
        };
        let draft = form.into_draft().unwrap();
        assert!(draft.description.is_none());
        assert_eq!(draft.status, crate::core::Status::InProgress);
        assert_eq!(draft.priority.as_deref(), Some("high"));
    }
}
