//! The static product catalog.

use rust_decimal::Decimal;

use crate::types::{Fabric, Product, ProductId};

/// An immutable list of products, looked up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// Later products with a duplicate id are dropped.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if !unique.iter().any(|p| p.id == product.id) {
                unique.push(product);
            }
        }
        Self { products: unique }
    }

    /// The products sold on the textile storefront page.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Product {
                id: ProductId::new(1),
                name: "Cotton Summer Dress".to_owned(),
                price: Decimal::new(8999, 2),
                fabric: Fabric::Cotton,
                image: "path/to/cotton-dress.jpg".to_owned(),
                description: "Comfortable and breathable cotton dress perfect for summer days."
                    .to_owned(),
            },
            Product {
                id: ProductId::new(2),
                name: "Silk Evening Gown".to_owned(),
                price: Decimal::new(29999, 2),
                fabric: Fabric::Silk,
                image: "path/to/silk-gown.jpg".to_owned(),
                description: "Elegant silk gown for special occasions.".to_owned(),
            },
            Product {
                id: ProductId::new(3),
                name: "Linen Casual Shirt".to_owned(),
                price: Decimal::new(6999, 2),
                fabric: Fabric::Linen,
                image: "path/to/linen-shirt.jpg".to_owned(),
                description: "Sustainable linen shirt with natural texture.".to_owned(),
            },
        ])
    }

    /// Find a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products made from `fabric`.
    pub fn by_fabric<'a>(&'a self, fabric: &'a Fabric) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| &p.fabric == fabric)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_products() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 3);
        let gown = catalog.find(ProductId::new(2)).unwrap();
        assert_eq!(gown.fabric, Fabric::Silk);
        assert_eq!(gown.unit_price().display(), "$299.99");
        assert!(catalog.find(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_by_fabric() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_fabric(&Fabric::Linen).count(), 1);
        assert_eq!(catalog.by_fabric(&Fabric::Wool).count(), 0);
        assert_eq!(catalog.by_fabric(&"Linen".parse().unwrap()).count(), 0);
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let mut products = Catalog::builtin().products().to_vec();
        let mut duplicate = products[0].clone();
        duplicate.name = "Imposter".to_owned();
        products.push(duplicate);

        let catalog = Catalog::new(products);
        assert_eq!(catalog.products().len(), 3);
        assert_eq!(catalog.find(ProductId::new(1)).unwrap().name, "Cotton Summer Dress");
    }
}
