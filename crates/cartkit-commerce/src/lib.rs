//! Cart domain types for cartkit.
//!
//! This crate holds the pure, synchronous part of the cart:
//!
//! - **Catalog**: products as returned by the catalog API, stock levels
//! - **Cart**: the ordered, id-unique list of products with amounts
//!
//! Nothing here performs I/O. Remote lookups and persistence live in
//! `cartkit-store`, which drives these types.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartkit_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.push(Product::new(ProductId::new(1), 1))?;
//! cart.increment(ProductId::new(1))?;
//!
//! assert_eq!(cart.amount_of(ProductId::new(1)), Some(2));
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;

pub use cart::Cart;
pub use catalog::{CatalogProduct, Product, Stock};
pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;

    pub use crate::cart::Cart;
    pub use crate::catalog::{CatalogProduct, Product, Stock};
}
