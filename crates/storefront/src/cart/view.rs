//! Display data for the cart modal.

use textile_core::{Price, ProductId};

use super::{Cart, CartLine};

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Placeholder shown instead of an empty item list.
    pub const EMPTY_MESSAGE: &'static str = "Your cart is empty";

    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::zero().display(),
            item_count: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Badge text, `None` when the badge should be hidden.
    #[must_use]
    pub fn badge(&self) -> Option<String> {
        (self.item_count > 0).then(|| self.item_count.to_string())
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        if cart.is_empty() {
            return Self::empty();
        }
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            total: Price::from_amount(cart.total_price()).display(),
            item_count: cart.total_items(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            quantity: line.quantity,
            price: line.product.unit_price().display(),
            line_price: line.line_total().display(),
        }
    }
}
