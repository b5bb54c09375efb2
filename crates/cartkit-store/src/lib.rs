//! Stock-checked, write-through shopping cart store.
//!
//! [`CartStore`] owns the session's cart. It validates amount changes
//! against a remote [`StockLookup`], fetches new products from a
//! [`Catalog`], writes every committed cart to durable storage before
//! publishing it, and reports failures to a [`Notifier`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cartkit_cache::Cache;
//! use cartkit_data::FetchClient;
//! use cartkit_store::{CartStore, HttpProductApi, UpdateProductAmount};
//!
//! let api = Arc::new(HttpProductApi::new(
//!     FetchClient::new().with_base_url("http://localhost:3333"),
//! ));
//! let store = CartStore::builder(Cache::open_dir(".cartkit")?, api.clone(), api).open()?;
//!
//! store.add_product(1.into()).await?;
//! store.update_product_amount(UpdateProductAmount::new(1.into(), 3)).await?;
//! println!("{} products in cart", store.item_count());
//! ```

mod error;
mod notify;
mod remote;
mod store;

pub use error::CartError;
pub use notify::{ChannelNotifier, Notice, Notifier, TracingNotifier};
pub use remote::{Catalog, HttpProductApi, StockLookup};
pub use store::{default_storage_key, CartStore, CartStoreBuilder, UpdateProductAmount};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartError, CartStore, Catalog, Notice, Notifier, StockLookup, UpdateProductAmount,
    };
    pub use cartkit_commerce::prelude::*;
}
