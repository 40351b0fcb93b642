//! Contact form handling.
//!
//! Validation is presence-only: every field must be present and non-empty.
//! Whitespace counts as present. There is no per-field error; any gap shows
//! the same message.
//!
//! The backend is a `Submitter`. The page ships `DemoSubmitter`, which makes
//! no network call, so a real transport can be dropped in without touching
//! validation or status display.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::config::Messages;

/// Form field names read from the form data.
pub const FIELD_NAMES: [&str; 3] = ["name", "email", "message"];

/// Raw values as read from the form. `None` means the field was absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactFields {
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            email: Some(email.to_owned()),
            message: Some(message.to_owned()),
        }
    }
}

/// A validated message, ready to hand to a backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("name, email and message are all required")]
pub struct MissingFields;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Status line under the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Error(String),
    Success(String),
}

impl FormStatus {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Error(text) | Self::Success(text) => Some(text),
        }
    }
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub status: FormStatus,
    /// Clear every form field.
    pub reset: bool,
}

/// Delivers a validated message somewhere.
pub trait Submitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Accepts everything and sends nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoSubmitter;

impl Submitter for DemoSubmitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), SubmitError> {
        log::info!("contact form accepted (demo, not sent): {} chars", message.message.len());
        Ok(())
    }
}

/// Require all three fields to be present and non-empty.
pub fn validate(fields: &ContactFields) -> Result<ContactMessage, MissingFields> {
    match (present(fields.name.as_deref()), present(fields.email.as_deref()), present(fields.message.as_deref())) {
        (Some(name), Some(email), Some(message)) => Ok(ContactMessage {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }),
        _ => Err(MissingFields),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Validate, hand off to `submitter`, and decide what the form shows next.
pub fn handle_submit<T: Submitter + ?Sized>(fields: &ContactFields, submitter: &mut T, messages: &Messages) -> SubmitOutcome {
    let message = match validate(fields) {
        Ok(message) => message,
        Err(e) => {
            log::debug!("contact form rejected: {e}");
            return SubmitOutcome { status: FormStatus::Error(messages.missing_fields.clone()), reset: false };
        }
    };

    match submitter.submit(&message) {
        Ok(()) => SubmitOutcome { status: FormStatus::Success(messages.sent.clone()), reset: true },
        Err(e) => {
            log::warn!("contact form not delivered: {e}");
            SubmitOutcome { status: FormStatus::Error(messages.send_failed.clone()), reset: false }
        }
    }
}
