//! Product types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product as returned by `GET products/{id}`.
///
/// Only `id` is interpreted. Everything else (title, price, image, ...) is
/// kept as-is in `fields`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProduct {
    /// Unique product identifier.
    pub id: ProductId,
    /// Descriptive fields, passed through untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CatalogProduct {
    /// Create a catalog product with no descriptive fields.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Set a descriptive field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Turn the catalog entry into a cart entry holding a single unit.
    ///
    /// An `amount` sent by the catalog is discarded.
    pub fn into_cart_product(self) -> Product {
        let mut fields = self.fields;
        fields.remove("amount");
        Product {
            id: self.id,
            amount: 1,
            fields,
        }
    }
}

/// A product in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Units in the cart. Always positive while the product is in a cart.
    pub amount: i64,
    /// Descriptive fields copied from the catalog.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// Create a cart product with no descriptive fields.
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self {
            id,
            amount,
            fields: Map::new(),
        }
    }

    /// Set a descriptive field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a descriptive field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Best-effort display name: `title`, then `name`.
    pub fn display_name(&self) -> Option<&str> {
        self.field("title")
            .or_else(|| self.field("name"))
            .and_then(Value::as_str)
    }

    /// Unit price, when the catalog sends a numeric `price`.
    pub fn price(&self) -> Option<f64> {
        self.field("price").and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_product_keeps_opaque_fields() {
        let product: CatalogProduct = serde_json::from_value(json!({
            "id": 1,
            "title": "Running shoe",
            "price": 179.9,
            "image": "https://cdn.example.com/shoe.jpg"
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.fields.len(), 3);
        assert_eq!(product.fields["title"], json!("Running shoe"));
    }

    #[test]
    fn test_into_cart_product_starts_at_one() {
        let product = CatalogProduct::new(ProductId::new(2))
            .with_field("title", "Sneaker")
            .with_field("amount", 40)
            .into_cart_product();

        assert_eq!(product.amount, 1);
        assert!(product.field("amount").is_none());
        assert_eq!(product.display_name(), Some("Sneaker"));
    }

    #[test]
    fn test_product_serializes_flat() {
        let product = Product::new(ProductId::new(3), 2).with_field("name", "Boot");
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value, json!({ "id": 3, "amount": 2, "name": "Boot" }));
    }

    #[test]
    fn test_display_name_prefers_title() {
        let product = Product::new(ProductId::new(4), 1)
            .with_field("name", "boot-4")
            .with_field("title", "Leather boot");
        assert_eq!(product.display_name(), Some("Leather boot"));

        let bare = Product::new(ProductId::new(5), 1);
        assert_eq!(bare.display_name(), None);
        assert_eq!(bare.price(), None);
    }
}
