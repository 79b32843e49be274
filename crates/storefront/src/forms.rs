//! Contact form validation.
//!
//! Every form on the page is validated on submit. Blank fields are skipped;
//! filled-in `email` and `phone` fields must parse. All violations are
//! reported together in one error notification.

use textile_core::{Email, PhoneNumber};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::notify::{NotificationKind, Notifier};

/// Shown after a submission passes validation.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

/// A field that failed validation. The display text is user-facing.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormViolation {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Result of handling a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Valid; the form should be reset.
    Accepted,
    /// Invalid; the form keeps its values.
    Rejected(Vec<FormViolation>),
}

/// The validated fields of a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactSubmission {
    /// Collect fields from `(name, value)` pairs, e.g. a form's `FormData`.
    ///
    /// Blank values count as absent. For repeated names the last one wins.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut submission = Self::default();
        for (name, value) in fields {
            let value: String = value.into();
            let value = (!value.is_empty()).then_some(value);
            match name.as_ref() {
                "email" => submission.email = value,
                "phone" => submission.phone = value,
                _ => {}
            }
        }
        submission
    }

    /// Check every present field.
    ///
    /// # Errors
    ///
    /// Returns all violations, email first.
    pub fn validate(&self) -> Result<(), Vec<FormViolation>> {
        let mut violations = Vec::new();

        if self
            .email
            .as_deref()
            .is_some_and(|email| Email::parse(email).is_err())
        {
            violations.push(FormViolation::InvalidEmail);
        }

        if self
            .phone
            .as_deref()
            .is_some_and(|phone| PhoneNumber::parse(phone).is_err())
        {
            violations.push(FormViolation::InvalidPhone);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Join violations into one notification message.
#[must_use]
pub fn violation_message(violations: &[FormViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate a submission and tell the user how it went.
///
/// Nothing is sent anywhere; acceptance is only acknowledged.
#[instrument(skip_all)]
pub fn handle_submission(submission: &ContactSubmission, notifier: &dyn Notifier) -> FormOutcome {
    match submission.validate() {
        Ok(()) => {
            debug!("Form accepted");
            notifier.notify(SUCCESS_MESSAGE, NotificationKind::Success);
            FormOutcome::Accepted
        }
        Err(violations) => {
            debug!(?violations, "Form rejected");
            notifier.notify(&violation_message(&violations), NotificationKind::Error);
            FormOutcome::Rejected(violations)
        }
    }
}
