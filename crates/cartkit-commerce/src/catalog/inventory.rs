//! Stock levels.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Units available for a product, as returned by `GET stock/{id}`.
///
/// Read-only: the cart never reserves or decrements stock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Stock {
    /// Product the level belongs to, when the API echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Units available remotely.
    pub amount: i64,
}

impl Stock {
    /// Create a stock level.
    pub fn new(amount: i64) -> Self {
        Self { id: None, amount }
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.amount
    }

    /// Fail with `InsufficientInventory` unless `requested` units are available.
    pub fn ensure_available(
        &self,
        product_id: ProductId,
        requested: i64,
    ) -> Result<(), CommerceError> {
        if self.can_fulfill(requested) {
            Ok(())
        } else {
            Err(CommerceError::InsufficientInventory {
                product_id,
                requested,
                available: self.amount,
            })
        }
    }
}
