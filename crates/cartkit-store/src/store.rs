//! The cart store.

use crate::error::CartError;
use crate::notify::{Notice, Notifier, TracingNotifier};
use crate::remote::{Catalog, StockLookup};
use cartkit_cache::{cache_key, Cache};
use cartkit_commerce::{Cart, CommerceError, ProductId};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, warn};

/// Storage key used when none is configured.
pub fn default_storage_key() -> String {
    cache_key!("cartkit", "cart")
}

/// Arguments of [`CartStore::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    /// Product whose amount changes.
    pub product_id: ProductId,
    /// New amount. Zero or negative is a no-op.
    pub amount: i64,
}

impl UpdateProductAmount {
    /// Create an update request.
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

/// Builder for [`CartStore`].
pub struct CartStoreBuilder {
    cache: Cache,
    catalog: Arc<dyn Catalog>,
    stock: Arc<dyn StockLookup>,
    notifier: Arc<dyn Notifier>,
    storage_key: String,
}

impl CartStoreBuilder {
    /// Store the cart under a different key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Send failure notices somewhere other than the log.
    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Load the stored cart and build the store.
    ///
    /// A stored value that does not parse is discarded with a warning and
    /// the store starts empty. A storage backend that cannot be read at all
    /// is an error.
    pub fn open(self) -> Result<CartStore, CartError> {
        let initial = match self.cache.get::<Cart>(&self.storage_key) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) if e.is_malformed() => {
                warn!(key = %self.storage_key, error = %e, "stored cart is malformed, starting empty");
                Cart::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!(
            key = %self.storage_key,
            items = initial.unique_item_count(),
            "cart loaded"
        );

        let (state, _) = watch::channel(initial);
        Ok(CartStore {
            state,
            writer: Mutex::new(()),
            cache: self.cache,
            storage_key: self.storage_key,
            catalog: self.catalog,
            stock: self.stock,
            notifier: self.notifier,
        })
    }
}

/// Shared shopping cart with stock-checked, write-through mutations.
///
/// One instance lives for the whole session and is shared by reference
/// (usually in an `Arc`). Reads never block. Mutations are serialized: each
/// one holds the writer lock from reading the current cart until its result
/// is committed, so overlapping calls apply one after another instead of
/// overwriting each other.
///
/// Every mutation returns the committed cart or the reason nothing changed.
/// Failures are also reported to the [`Notifier`].
pub struct CartStore {
    state: watch::Sender<Cart>,
    writer: Mutex<()>,
    cache: Cache,
    storage_key: String,
    catalog: Arc<dyn Catalog>,
    stock: Arc<dyn StockLookup>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Start building a store over the given storage and remote collaborators.
    pub fn builder(
        cache: Cache,
        catalog: Arc<dyn Catalog>,
        stock: Arc<dyn StockLookup>,
    ) -> CartStoreBuilder {
        CartStoreBuilder {
            cache,
            catalog,
            stock,
            notifier: Arc::new(TracingNotifier),
            storage_key: default_storage_key(),
        }
    }

    /// Snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.state.borrow().unique_item_count()
    }

    /// Watch committed carts.
    ///
    /// The receiver starts at the current cart and sees every later commit.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// The key the cart is stored under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart is incremented if the stock allows it.
    /// A new product is fetched from the catalog and appended with amount 1,
    /// without a stock check.
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let result = self.try_add_product(product_id).await;
        self.report(result, Notice::AddFailed)
    }

    /// Remove a product from the cart.
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let result = self.try_remove_product(product_id).await;
        self.report(result, Notice::RemoveFailed)
    }

    /// Set the amount of a product already in the cart.
    ///
    /// An amount of zero or less changes nothing and is not an error. A
    /// product not in the cart is rejected before stock is queried.
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        if update.amount <= 0 {
            return Ok(self.cart());
        }
        let result = self.try_update_product_amount(update).await;
        self.report(result, Notice::UpdateFailed)
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let _writer = self.writer.lock().await;
        let mut cart = self.cart();

        match cart.amount_of(product_id) {
            Some(current) => {
                let stock = self.stock.stock(product_id).await?;
                let requested = current.checked_add(1).ok_or(CommerceError::Overflow)?;
                stock.ensure_available(product_id, requested)?;
                cart.increment(product_id)?;
            }
            None => {
                let product = self.catalog.product(product_id).await?;
                cart.push(product.into_cart_product())?;
            }
        }

        self.commit(cart)
    }

    async fn try_remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let _writer = self.writer.lock().await;
        let mut cart = self.cart();
        cart.remove(product_id)?;
        self.commit(cart)
    }

    async fn try_update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let UpdateProductAmount { product_id, amount } = update;

        let _writer = self.writer.lock().await;
        let mut cart = self.cart();
        if !cart.contains(product_id) {
            return Err(CommerceError::ItemNotInCart(product_id).into());
        }

        let stock = self.stock.stock(product_id).await?;
        stock.ensure_available(product_id, amount)?;
        cart.set_amount(product_id, amount)?;

        self.commit(cart)
    }

    /// Persist first, then publish. A failed write leaves memory untouched.
    fn commit(&self, cart: Cart) -> Result<Cart, CartError> {
        self.cache.set(&self.storage_key, &cart)?;
        self.state.send_replace(cart.clone());

        debug!(
            items = cart.unique_item_count(),
            units = cart.item_count(),
            "cart committed"
        );
        Ok(cart)
    }

    fn report(&self, result: Result<Cart, CartError>, fallback: Notice) -> Result<Cart, CartError> {
        if let Err(err) = &result {
            let notice = if err.is_out_of_stock() {
                Notice::OutOfStock
            } else {
                fallback
            };
            match err {
                CartError::Commerce(_) => warn!(error = %err, "cart change rejected"),
                CartError::Remote(_) | CartError::Storage(_) => {
                    error!(error = %err, "cart change failed")
                }
            }
            self.notifier.notify(notice);
        }
        result
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.storage_key)
            .field("cart", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
