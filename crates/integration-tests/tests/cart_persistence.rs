//! Integration tests for the persisted cart.
//!
//! Each test mutates a cart backed by a shared [`MemoryStore`] and checks
//! what a fresh page load would see.

use std::rc::Rc;

use rust_decimal::Decimal;
use textile_core::{Catalog, ProductId};
use textile_integration_tests::{CART_KEY, persisted_cart, shared_store};
use textile_storefront::cart::{CartChange, CartStore, CartView};
use textile_storefront::storage::MemoryStore;

fn cart_on(store: &Rc<MemoryStore>) -> CartStore<Rc<MemoryStore>> {
    CartStore::load(Rc::clone(store), CART_KEY)
}

// =============================================================================
// Shopping Flow
// =============================================================================

#[test]
fn test_shopping_session_survives_reload() {
    let catalog = Catalog::builtin();
    let store = shared_store();
    let mut cart = cart_on(&store);

    assert_eq!(cart.add_by_id(&catalog, ProductId::new(1)), Some(1));
    assert_eq!(cart.add_by_id(&catalog, ProductId::new(1)), Some(2));
    assert_eq!(cart.add_by_id(&catalog, ProductId::new(2)), Some(1));
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), Decimal::new(47997, 2));

    let reloaded = cart_on(&store);
    assert_eq!(reloaded.cart(), cart.cart());
    assert_eq!(reloaded.total_price(), Decimal::new(47997, 2));
}

#[test]
fn test_decrement_to_zero_removes_line() {
    let catalog = Catalog::builtin();
    let store = shared_store();
    let mut cart = cart_on(&store);
    cart.add_by_id(&catalog, ProductId::new(1));
    cart.add_by_id(&catalog, ProductId::new(1));
    cart.add_by_id(&catalog, ProductId::new(2));

    assert_eq!(cart.set_quantity(ProductId::new(1), -2), CartChange::Removed);
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), Decimal::new(29999, 2));

    let reloaded = cart_on(&store);
    assert!(reloaded.cart().line(ProductId::new(1)).is_none());
    assert_eq!(reloaded.total_items(), 1);
}

#[test]
fn test_unknown_product_is_ignored() {
    let catalog = Catalog::builtin();
    let store = shared_store();
    let mut cart = cart_on(&store);

    assert_eq!(cart.add_by_id(&catalog, ProductId::new(42)), None);
    assert_eq!(cart.set_quantity(ProductId::new(42), 1), CartChange::Unchanged);
    assert!(cart.cart().is_empty());
    assert_eq!(persisted_cart(&store), serde_json::Value::Null);
}

#[test]
fn test_remove_persists_even_without_line() {
    let store = shared_store();
    let mut cart = cart_on(&store);

    assert!(!cart.remove(ProductId::new(3)));
    assert_eq!(persisted_cart(&store), serde_json::json!([]));
}

// =============================================================================
// Storage Format
// =============================================================================

#[test]
fn test_storage_format_is_flat_lines() {
    let catalog = Catalog::builtin();
    let store = shared_store();
    let mut cart = cart_on(&store);
    cart.add_by_id(&catalog, ProductId::new(3));

    let saved = persisted_cart(&store);
    let line = &saved[0];
    assert_eq!(line["id"], 3);
    assert_eq!(line["name"], "Linen Casual Shirt");
    assert_eq!(line["price"], "69.99");
    assert_eq!(line["fabric"], "linen");
    assert_eq!(line["quantity"], 1);
}

#[test]
fn test_loads_cart_written_with_numeric_prices() {
    let raw = r#"[
        {"id":1,"name":"Cotton Summer Dress","price":89.99,"fabric":"cotton",
         "image":"path/to/cotton-dress.jpg","description":"Cotton","quantity":2}
    ]"#;
    let store = Rc::new(MemoryStore::with_entry(CART_KEY, raw));
    let cart = cart_on(&store);

    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), Decimal::new(17998, 2));
}

#[test]
fn test_malformed_cart_starts_empty() {
    for raw in ["not json", r#"{"id":1}"#, r#"[{"id":"one"}]"#] {
        let store = Rc::new(MemoryStore::with_entry(CART_KEY, raw));
        let cart = cart_on(&store);
        assert!(cart.cart().is_empty(), "{raw} should load as an empty cart");
    }
}

#[test]
fn test_failed_write_keeps_session_cart() {
    let catalog = Catalog::builtin();
    let store = shared_store();
    store.reject_writes(true);
    let mut cart = cart_on(&store);

    cart.add_by_id(&catalog, ProductId::new(2));
    assert_eq!(cart.total_items(), 1);
    assert_eq!(persisted_cart(&store), serde_json::Value::Null);
}

// =============================================================================
// Cart View
// =============================================================================

#[test]
fn test_view_matches_cart() {
    let catalog = Catalog::builtin();
    let store = shared_store();
    let mut cart = cart_on(&store);
    assert_eq!(CartView::from(cart.cart()), CartView::empty());

    cart.add_by_id(&catalog, ProductId::new(1));
    cart.add_by_id(&catalog, ProductId::new(1));
    let view = CartView::from(cart.cart());

    assert_eq!(view.total, "$179.98");
    assert_eq!(view.badge().as_deref(), Some("2"));
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].price, "$89.99");
    assert_eq!(view.items[0].quantity, 2);
}
