//! Integration tests for page configuration and the theme preference.

use std::collections::HashMap;
use std::rc::Rc;

use textile_integration_tests::{RecordingNotifier, shared_store};
use textile_storefront::config::{ConfigError, StorefrontConfig};
use textile_storefront::notify::NotificationKind;
use textile_storefront::theme::{Theme, ThemeController};

fn body_attributes(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |name| map.get(name).cloned()
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_plain_body_uses_defaults() {
    let config = StorefrontConfig::from_attributes(body_attributes(&[]));
    assert_eq!(config.ok(), Some(StorefrontConfig::default()));
}

#[test]
fn test_body_attributes_override_defaults() {
    let config = StorefrontConfig::from_attributes(body_attributes(&[
        ("data-scroll-duration", "400"),
        ("data-scroll-offset", "64"),
        ("data-log", "textile_storefront=debug"),
    ]))
    .unwrap_or_default();

    assert!((config.scroll.duration_ms - 400.0).abs() < f64::EPSILON);
    assert!((config.scroll.header_offset - 64.0).abs() < f64::EPSILON);
    assert_eq!(config.log_filter, "textile_storefront=debug");
    assert_eq!(config.storage.cart, "textileCart");
}

#[test]
fn test_bad_attribute_is_reported() {
    let result =
        StorefrontConfig::from_attributes(body_attributes(&[("data-scroll-duration", "fast")]));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidAttribute(ref name, _)) if name == "data-scroll-duration"
    ));
}

// =============================================================================
// Theme
// =============================================================================

#[test]
fn test_theme_preference_round_trip() {
    let store = shared_store();
    let notifier = RecordingNotifier::new();

    let mut theme = ThemeController::load(Rc::clone(&store), "theme");
    assert_eq!(theme.current(), Theme::Light);
    theme.toggle(&notifier);

    let next_visit = ThemeController::load(Rc::clone(&store), "theme");
    assert_eq!(next_visit.current(), Theme::Dark);

    let shown = notifier.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].message, "Switched to dark theme");
    assert_eq!(shown[0].kind, NotificationKind::Info);
}
