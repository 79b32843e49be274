//! Product records shown on the storefront.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Fabric, Price, ProductId};

/// A product on the storefront page.
///
/// Products are defined statically and never mutated. The serialized field
/// names are part of the persisted cart format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the default currency. Never negative.
    pub price: Decimal,
    pub fabric: Fabric,
    /// Image URI, relative to the page or absolute.
    pub image: String,
    pub description: String,
}

impl Product {
    /// The unit price as a displayable [`Price`].
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::from_amount(self.price)
    }
}
