//! Shopping cart module.

mod cart;

pub use cart::Cart;
