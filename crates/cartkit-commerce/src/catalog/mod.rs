//! Product catalog module.
//!
//! Contains the product shapes returned by the catalog API and the stock
//! level returned by the stock API.

mod inventory;
mod product;

pub use inventory::Stock;
pub use product::{CatalogProduct, Product};
