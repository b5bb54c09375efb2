//! Store error types.

use cartkit_cache::CacheError;
use cartkit_commerce::CommerceError;
use cartkit_data::FetchError;
use thiserror::Error;

/// Why a cart operation did not commit.
///
/// Whenever one of these is returned the cart, in memory and in storage,
/// is exactly what it was before the call.
#[derive(Error, Debug)]
pub enum CartError {
    /// The requested change breaks a cart rule: not enough stock, or the
    /// product is not in the cart.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The catalog or stock API failed or answered with something unreadable.
    #[error("Remote lookup failed: {0}")]
    Remote(#[from] FetchError),

    /// Durable storage could not be read or written.
    #[error("Cart storage failed: {0}")]
    Storage(#[from] CacheError),
}

impl CartError {
    /// Whether the request exceeded the available stock.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::Commerce(e) if e.is_out_of_stock())
    }

    /// Whether the operation targeted a product that is not in the cart.
    pub fn is_not_in_cart(&self) -> bool {
        matches!(self, CartError::Commerce(CommerceError::ItemNotInCart(_)))
    }
}
