//! Type-safe durable key-value storage for cartkit.
//!
//! Provides a small, ergonomic API for keeping serializable values in a
//! string-keyed store with automatic JSON serialization. Two backends ship
//! with the crate: an in-memory map and a directory of files.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartkit_cache::{cache_key, Cache};
//!
//! let cache = Cache::open_dir(".cartkit")?;
//! let key = cache_key!("cartkit", "cart");
//!
//! // Store a value
//! cache.set(&key, &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = cache.get(&key)?;
//!
//! // Delete a value
//! cache.delete(&key)?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileBackend, KvBackend, MemoryBackend};
}
