//! Client-side shopping cart.
//!
//! [`Cart`] holds the lines and enforces the invariants: one line per product
//! id and every quantity at least 1. [`CartStore`] owns a cart together with
//! its persistence boundary and writes the whole cart back to storage after
//! every mutation.

mod line;
mod view;

pub use line::CartLine;
pub use view::{CartItemView, CartView};

use rust_decimal::Decimal;
use textile_core::{Catalog, Price, Product, ProductId};
use tracing::{debug, instrument, warn};

use crate::storage::{self, KeyValueStore};

/// Outcome of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// The line now holds this quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
    /// No line exists for the id.
    Unchanged,
}

/// An ordered list of cart lines keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a cart from raw lines, restoring the invariants.
    ///
    /// Zero-quantity and negative-price lines are dropped and repeated ids
    /// are merged into the first occurrence.
    #[must_use]
    pub fn from_lines(raw: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in raw {
            if line.quantity == 0 {
                continue;
            }
            if line.product.price < Decimal::ZERO {
                warn!(
                    product_id = %line.id(),
                    price = %line.product.price,
                    "Dropping cart line with negative price"
                );
                continue;
            }
            match cart.line_mut(line.id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add one unit of `product`, returning the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine::new(product.clone()));
        1
    }

    /// Adjust a line's quantity by `delta`, removing it at zero or below.
    pub fn set_quantity(&mut self, id: ProductId, delta: i32) -> CartChange {
        let Some(line) = self.line_mut(id) else {
            return CartChange::Unchanged;
        };

        let next = i64::from(line.quantity) + i64::from(delta);
        if next <= 0 {
            self.lines.retain(|l| l.id() != id);
            return CartChange::Removed;
        }

        line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        CartChange::Updated(line.quantity)
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id() != id);
        self.lines.len() != before
    }

    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.id() == id)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities, for the cart badge.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price times quantity, rounded to two decimal places.
    ///
    /// Saturates at `Decimal::MAX` rather than overflowing.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .sum::<Price>()
            .rounded()
    }
}

/// A cart bound to a storage key.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart persisted under `key`.
    ///
    /// Never fails: an absent, unreadable or malformed value gives an empty
    /// cart.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match storage::get_json::<Vec<CartLine>, _>(&storage, &key) {
            Ok(Some(lines)) => Cart::from_lines(lines),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable persisted cart");
                Cart::new()
            }
        };
        debug!(lines = cart.lines().len(), items = cart.total_items(), "Cart loaded");
        Self { cart, storage, key }
    }

    /// Add one unit of `product` and persist.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&mut self, product: &Product) -> u32 {
        let quantity = self.cart.add(product);
        debug!(quantity, "Added to cart");
        self.persist();
        quantity
    }

    /// Add the catalog product with `id`. Unknown ids are ignored.
    pub fn add_by_id(&mut self, catalog: &Catalog, id: ProductId) -> Option<u32> {
        let Some(product) = catalog.find(id) else {
            warn!(product_id = %id, "Ignoring add for unknown product");
            return None;
        };
        Some(self.add(product))
    }

    /// Adjust a line's quantity by `delta` and persist.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, id: ProductId, delta: i32) -> CartChange {
        let change = self.cart.set_quantity(id, delta);
        debug!(?change, "Adjusted cart quantity");
        if change != CartChange::Unchanged {
            self.persist();
        }
        change
    }

    /// Remove a line unconditionally and persist.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove(id);
        debug!(removed, "Removed from cart");
        self.persist();
        removed
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.cart.total_price()
    }

    /// Write the whole cart back. A failed write keeps the in-memory state.
    fn persist(&self) {
        if let Err(e) = storage::set_json(&self.storage, &self.key, self.cart.lines()) {
            warn!(error = %e, "Failed to persist cart");
        }
    }
}
