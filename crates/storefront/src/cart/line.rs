//! A single cart line.

use serde::{Deserialize, Serialize};
use textile_core::{Price, Product, ProductId};

/// One product's entry in the cart.
///
/// Serialized flat: the product's fields plus `quantity`, which is the
/// `textileCart` storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLine {
    /// A new line holding one unit of `product`.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price() * self.quantity
    }
}
