//! Light/dark theme, persisted across visits.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::notify::{NotificationKind, Notifier};
use crate::storage::KeyValueStore;

/// Error returned for values other than `light` and `dark`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);

/// Page colour theme, applied as `data-theme` on `<body>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a stored or attribute value, falling back to light.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Current theme plus its storage key.
#[derive(Debug)]
pub struct ThemeController<S> {
    current: Theme,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Load the saved theme. Missing, unreadable or unknown values give light.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = storage.get(&key).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read saved theme");
            None
        });
        let current = Theme::from_value(stored.as_deref());
        debug!(theme = %current, "Theme loaded");
        Self {
            current,
            storage,
            key,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Switch theme, save it and announce the change.
    pub fn toggle(&mut self, notifier: &dyn Notifier) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.storage.set(&self.key, self.current.as_str()) {
            warn!(error = %e, "Failed to save theme");
        }
        notifier.notify(
            &format!("Switched to {} theme", self.current),
            NotificationKind::Info,
        );
        self.current
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStore;

    #[test]
    fn test_from_value_defaults_to_light() {
        assert_eq!(Theme::from_value(None), Theme::Light);
        assert_eq!(Theme::from_value(Some("sepia")), Theme::Light);
        assert_eq!(Theme::from_value(Some("dark")), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_and_notifies() {
        let backing = Rc::new(MemoryStore::new());
        let notifier = RecordingNotifier::new();
        let mut theme = ThemeController::load(Rc::clone(&backing), "theme");
        assert_eq!(theme.current(), Theme::Light);

        assert_eq!(theme.toggle(&notifier), Theme::Dark);
        assert_eq!(backing.get("theme").unwrap().as_deref(), Some("dark"));
        let shown = notifier.last().unwrap();
        assert_eq!(shown.message, "Switched to dark theme");
        assert_eq!(shown.kind, NotificationKind::Info);

        let reloaded = ThemeController::load(Rc::clone(&backing), "theme");
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let backing = MemoryStore::with_entry("theme", "dark");
        backing.reject_writes(true);
        let notifier = RecordingNotifier::new();
        let mut theme = ThemeController::load(backing, "theme");

        assert_eq!(theme.toggle(&notifier), Theme::Light);
        assert_eq!(notifier.shown().len(), 1);
    }
}
