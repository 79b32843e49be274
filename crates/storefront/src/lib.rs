//! Textile storefront, compiled to WebAssembly.
//!
//! Adds the interactive layer to the static storefront pages: a persisted
//! shopping cart, fabric filter and search, smooth scrolling, form
//! validation, toast notifications and a light/dark theme.
//!
//! The state machines in [`cart`], [`catalog`], [`forms`], [`nav`],
//! [`scroll`] and [`theme`] do not touch the DOM and run under native tests.
//! [`dom`] binds them to the page.

// `#[wasm_bindgen]` expands to unsafe FFI shims.
#![allow(unsafe_code)]

pub mod app;
pub mod bootstrap;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod error;
pub mod forms;
pub mod nav;
pub mod notify;
pub mod scroll;
pub mod storage;
pub mod telemetry;
pub mod theme;

use textile_core::ProductId;
use tracing::warn;
use wasm_bindgen::prelude::*;

/// Entry point run when the module is instantiated.
///
/// # Errors
///
/// Fails outside a browser page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    bootstrap::start().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Add a catalog product to the cart. Unknown ids are ignored.
#[wasm_bindgen(js_name = addProductToCart)]
pub fn add_product_to_cart(id: i32) {
    with_app("addProductToCart", |app| {
        dom::cart::add_product(app, ProductId::new(id));
    });
}

/// Change a cart line's quantity by `delta`; at zero or below it is removed.
#[wasm_bindgen(js_name = updateQuantity)]
pub fn update_quantity(id: i32, delta: i32) {
    with_app("updateQuantity", |app| {
        dom::cart::adjust_quantity(app, ProductId::new(id), delta);
    });
}

/// Remove a product from the cart.
#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(id: i32) {
    with_app("removeFromCart", |app| {
        dom::cart::remove_product(app, ProductId::new(id));
    });
}

fn with_app(export: &str, f: impl FnOnce(&app::App)) {
    match app::current() {
        Some(app) => f(&app),
        None => warn!(export, "Called before the storefront started"),
    }
}
