//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors raised by cart transformations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Item already in cart.
    #[error("Item already in cart: {0}")]
    DuplicateItem(ProductId),

    /// Insufficient inventory.
    #[error("Insufficient inventory for {product_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in quantity calculation")]
    Overflow,
}

impl CommerceError {
    /// Whether this error means the remote stock cannot cover the request.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CommerceError::InsufficientInventory { .. })
    }
}
