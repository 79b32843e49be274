//! Integration tests for the textile storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p textile-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - cart mutations against a shared store, reloads
//! - `catalog_filtering` - fabric filter and search over the page's cards
//! - `contact_forms` - submission validation and notifications
//! - `page_config` - `data-*` configuration and theme persistence
//!
//! The browser bindings are not exercised here: every test drives the
//! DOM-free state machines with [`MemoryStore`] and [`RecordingNotifier`].

use std::rc::Rc;

use textile_core::Catalog;
use textile_storefront::catalog::{CardInfo, CatalogView};
use textile_storefront::storage::{KeyValueStore, MemoryStore};

pub use textile_storefront::notify::RecordingNotifier;

/// Storage key the cart persists under.
pub const CART_KEY: &str = "textileCart";

/// A shared in-memory store, so a test can reload from the same backing.
#[must_use]
pub fn shared_store() -> Rc<MemoryStore> {
    Rc::new(MemoryStore::new())
}

/// The persisted cart as JSON, `Null` when nothing was written.
#[must_use]
pub fn persisted_cart(store: &MemoryStore) -> serde_json::Value {
    store
        .get(CART_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(serde_json::Value::Null)
}

/// Product cards as the storefront page renders them for `catalog`.
#[must_use]
pub fn cards_for(catalog: &Catalog) -> Vec<CardInfo> {
    catalog
        .products()
        .iter()
        .map(|p| CardInfo::new(Some(p.fabric.as_str()), &p.name, &p.description))
        .collect()
}

/// Titles of the cards `view` leaves visible, in page order.
#[must_use]
pub fn visible_titles<'a>(view: &CatalogView, cards: &'a [CardInfo]) -> Vec<&'a str> {
    cards
        .iter()
        .filter(|card| view.is_visible(card))
        .map(|card| card.title.as_str())
        .collect()
}
