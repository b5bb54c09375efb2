//! The cart itself.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A shopping cart: products in insertion order, at most one entry per id.
///
/// Serializes as a bare JSON array of products, which is also the stored
/// format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing entries.
    ///
    /// Returns an error if an id repeats or an amount is not positive.
    pub fn from_items(items: impl IntoIterator<Item = Product>) -> Result<Self, CommerceError> {
        let mut cart = Self::new();
        for item in items {
            cart.push(item)?;
        }
        Ok(cart)
    }

    /// Append a product.
    ///
    /// Returns an error if:
    /// - The product is already in the cart
    /// - Its amount is not positive
    pub fn push(&mut self, product: Product) -> Result<(), CommerceError> {
        if product.amount <= 0 {
            return Err(CommerceError::InvalidQuantity(product.amount));
        }
        if self.contains(product.id) {
            return Err(CommerceError::DuplicateItem(product.id));
        }
        self.items.push(product);
        Ok(())
    }

    /// Add one unit to an existing entry, returning the new amount.
    pub fn increment(&mut self, product_id: ProductId) -> Result<i64, CommerceError> {
        let item = self.get_mut(product_id)?;
        item.amount = item.amount.checked_add(1).ok_or(CommerceError::Overflow)?;
        Ok(item.amount)
    }

    /// Replace the amount of an existing entry.
    ///
    /// The amount must be positive; an entry is never left at zero.
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64) -> Result<(), CommerceError> {
        if amount <= 0 {
            return Err(CommerceError::InvalidQuantity(amount));
        }
        self.get_mut(product_id)?.amount = amount;
        Ok(())
    }

    /// Remove an entry, keeping the order of the others.
    pub fn remove(&mut self, product_id: ProductId) -> Result<Product, CommerceError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;
        Ok(self.items.remove(index))
    }

    /// Get an entry by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|i| i.id == product_id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Amount of a product in the cart, if present.
    pub fn amount_of(&self, product_id: ProductId) -> Option<i64> {
        self.get(product_id).map(|i| i.amount)
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    /// Get total unit count (sum of amounts).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn get_mut(&mut self, product_id: ProductId) -> Result<&mut Product, CommerceError> {
        self.items
            .iter_mut()
            .find(|i| i.id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
