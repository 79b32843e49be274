//! Storefront configuration.
//!
//! Defaults match the page's design. Any value can be overridden with a
//! `data-*` attribute on `<body>`:
//!
//! - `data-scroll-duration` - Smooth scroll duration in ms (default: 800)
//! - `data-scroll-offset` - Fixed header height subtracted from anchor targets (default: 80)
//! - `data-section-threshold` - Distance above a section that activates its nav link (default: 200)
//! - `data-parallax-ratio` - Hero translation per scrolled pixel (default: -0.5)
//! - `data-notification-ms` - Time before a notification auto-dismisses (default: 3000)
//! - `data-log` - `tracing` filter directive (default: `textile_storefront=info`)

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid attribute {0}: {1}")]
    InvalidAttribute(String, String),
}

/// Storage keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// JSON array of cart lines
    pub cart: String,
    /// `"light"` or `"dark"`
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: "textileCart".to_owned(),
            theme: "theme".to_owned(),
        }
    }
}

/// Scroll and navigation behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    /// Smooth scroll animation length in milliseconds
    pub duration_ms: f64,
    /// Pixels left above an anchor target for the fixed header
    pub header_offset: f64,
    /// A section counts as current once scrolled within this many pixels of its top
    pub section_threshold: f64,
    /// Hero translation per scrolled pixel
    pub parallax_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            header_offset: 80.0,
            section_threshold: 200.0,
            parallax_ratio: -0.5,
        }
    }
}

/// Notification timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Delay before the `show` class is added, so the entry transition runs
    pub enter_delay_ms: i32,
    /// Time the notification stays up
    pub dismiss_after_ms: i32,
    /// Exit transition length before the element is removed
    pub exit_ms: i32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            dismiss_after_ms: 3000,
            exit_ms: 300,
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub storage: StorageKeys,
    pub scroll: ScrollConfig,
    pub notifications: NotificationConfig,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            scroll: ScrollConfig::default(),
            notifications: NotificationConfig::default(),
            log_filter: "textile_storefront=info".to_owned(),
        }
    }
}

impl StorefrontConfig {
    /// Build a configuration from attribute lookups.
    ///
    /// `attr` receives the attribute name (e.g. `data-scroll-duration`) and
    /// returns its value if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAttribute` if a present attribute does not
    /// parse or is out of range.
    pub fn from_attributes<F>(attr: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let duration_ms = get_f64_or(&attr, "data-scroll-duration", defaults.scroll.duration_ms)?;
        if duration_ms <= 0.0 {
            return Err(ConfigError::InvalidAttribute(
                "data-scroll-duration".to_owned(),
                "must be positive".to_owned(),
            ));
        }

        let scroll = ScrollConfig {
            duration_ms,
            header_offset: get_f64_or(&attr, "data-scroll-offset", defaults.scroll.header_offset)?,
            section_threshold: get_f64_or(
                &attr,
                "data-section-threshold",
                defaults.scroll.section_threshold,
            )?,
            parallax_ratio: get_f64_or(
                &attr,
                "data-parallax-ratio",
                defaults.scroll.parallax_ratio,
            )?,
        };

        let dismiss_after_ms = match attr("data-notification-ms") {
            Some(raw) => raw.trim().parse::<i32>().map_err(|e| {
                ConfigError::InvalidAttribute("data-notification-ms".to_owned(), e.to_string())
            })?,
            None => defaults.notifications.dismiss_after_ms,
        };
        if dismiss_after_ms < 0 {
            return Err(ConfigError::InvalidAttribute(
                "data-notification-ms".to_owned(),
                "must not be negative".to_owned(),
            ));
        }

        let log_filter = attr("data-log")
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            storage: defaults.storage,
            scroll,
            notifications: NotificationConfig {
                dismiss_after_ms,
                ..defaults.notifications
            },
            log_filter,
        })
    }
}

fn get_f64_or<F>(attr: &F, name: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = attr(name) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| ConfigError::InvalidAttribute(name.to_owned(), e.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidAttribute(
            name.to_owned(),
            "must be finite".to_owned(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_attributes() {
        let config = StorefrontConfig::from_attributes(attrs(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.storage.cart, "textileCart");
        assert_eq!(config.storage.theme, "theme");
        assert_eq!(config.scroll.duration_ms, 800.0);
        assert_eq!(config.notifications.dismiss_after_ms, 3000);
    }

    #[test]
    fn test_attribute_overrides() {
        let config = StorefrontConfig::from_attributes(attrs(&[
            ("data-scroll-duration", "500"),
            ("data-parallax-ratio", "-0.25"),
            ("data-notification-ms", " 4500 "),
            ("data-log", "textile_storefront=debug"),
        ]))
        .unwrap();

        assert_eq!(config.scroll.duration_ms, 500.0);
        assert_eq!(config.scroll.parallax_ratio, -0.25);
        assert_eq!(config.scroll.header_offset, 80.0);
        assert_eq!(config.notifications.dismiss_after_ms, 4500);
        assert_eq!(config.notifications.exit_ms, 300);
        assert_eq!(config.log_filter, "textile_storefront=debug");
    }

    #[test]
    fn test_invalid_number() {
        let err = StorefrontConfig::from_attributes(attrs(&[("data-scroll-offset", "tall")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAttribute(name, _) if name == "data-scroll-offset"));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        assert!(StorefrontConfig::from_attributes(attrs(&[("data-scroll-duration", "0")])).is_err());
        assert!(
            StorefrontConfig::from_attributes(attrs(&[("data-scroll-duration", "NaN")])).is_err()
        );
    }

    #[test]
    fn test_negative_notification_time_rejected() {
        assert!(
            StorefrontConfig::from_attributes(attrs(&[("data-notification-ms", "-1")])).is_err()
        );
    }
}
