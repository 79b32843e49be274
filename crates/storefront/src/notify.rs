//! Transient user-facing notifications.
//!
//! Components report through the [`Notifier`] trait so they can be exercised
//! without a DOM. The browser implementation lives in `dom::notify`.

use std::cell::RefCell;
use std::fmt;

/// Notification severity, reflected in the element's CSS class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Full class list for the notification element.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Something that can show notifications.
///
/// Notifications never queue or de-duplicate: each call shows one more.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Records notifications instead of showing them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    shown: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, oldest first.
    #[must_use]
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.shown.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.shown.borrow_mut().push(Notification {
            message: message.to_owned(),
            kind,
        });
    }
}
