//! In-memory stand-ins for the remote collaborators.

#![allow(dead_code)]

use async_trait::async_trait;
use cartkit_cache::Cache;
use cartkit_commerce::{Cart, CatalogProduct, Product, ProductId, Stock};
use cartkit_data::FetchError;
use cartkit_store::{Catalog, CartStore, ChannelNotifier, Notice, StockLookup};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Catalog and stock backed by maps. Missing ids answer 404.
#[derive(Default)]
pub struct FakeApi {
    products: Mutex<HashMap<ProductId, CatalogProduct>>,
    stock: Mutex<HashMap<ProductId, i64>>,
    offline: Mutex<bool>,
    delay: Mutex<Option<Duration>>,
    pub stock_calls: AtomicUsize,
    pub catalog_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, id: u64, title: &str, stock: i64) -> Self {
        let id = ProductId::new(id);
        self.products.lock().unwrap().insert(
            id,
            CatalogProduct::new(id)
                .with_field("title", title)
                .with_field("price", 99.9),
        );
        self.stock.lock().unwrap().insert(id, stock);
        self
    }

    pub fn set_stock(&self, id: u64, amount: i64) {
        self.stock.lock().unwrap().insert(ProductId::new(id), amount);
    }

    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    /// Make every lookup yield for a while before answering.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    async fn wait(&self) -> Result<(), FetchError> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.offline.lock().unwrap() {
            return Err(FetchError::RequestError("connection refused".to_string()));
        }
        Ok(())
    }

    fn not_found(path: &str) -> FetchError {
        FetchError::HttpError {
            status: 404,
            url: format!("http://fake/{path}"),
            message: "Not Found".to_string(),
        }
    }
}

#[async_trait]
impl Catalog for FakeApi {
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, FetchError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await?;
        let product = self.products.lock().unwrap().get(&product_id).cloned();
        product.ok_or_else(|| Self::not_found(&format!("products/{product_id}")))
    }
}

#[async_trait]
impl StockLookup for FakeApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await?;
        let amount = self.stock.lock().unwrap().get(&product_id).copied();
        amount
            .map(Stock::new)
            .ok_or_else(|| Self::not_found(&format!("stock/{product_id}")))
    }
}

/// A store wired to a fake API, a shared cache and a notice channel.
pub struct Harness {
    pub api: Arc<FakeApi>,
    pub cache: Cache,
    pub store: CartStore,
    pub notices: UnboundedReceiver<Notice>,
}

impl Harness {
    pub fn new(api: FakeApi) -> Self {
        Self::with_cache(api, Cache::memory())
    }

    pub fn with_cache(api: FakeApi, cache: Cache) -> Self {
        let api = Arc::new(api);
        let (notifier, notices) = ChannelNotifier::channel();
        let store = CartStore::builder(cache.clone(), api.clone(), api.clone())
            .notifier(notifier)
            .open()
            .unwrap();
        Self {
            api,
            cache,
            store,
            notices,
        }
    }

    /// Seed storage with a cart before the store opens.
    pub fn seeded(api: FakeApi, items: &[(u64, i64)]) -> Self {
        let cache = Cache::memory();
        let cart = cart_of(items);
        cache.set(&cartkit_store::default_storage_key(), &cart).unwrap();
        Self::with_cache(api, cache)
    }

    /// The cart as it is in durable storage.
    pub fn stored(&self) -> Option<Cart> {
        self.cache
            .get(&cartkit_store::default_storage_key())
            .unwrap()
    }

    /// Notices sent so far.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        let mut seen = Vec::new();
        while let Ok(notice) = self.notices.try_recv() {
            seen.push(notice);
        }
        seen
    }
}

pub fn cart_of(items: &[(u64, i64)]) -> Cart {
    Cart::from_items(
        items
            .iter()
            .map(|&(id, amount)| Product::new(ProductId::new(id), amount)),
    )
    .unwrap()
}

pub fn amounts(cart: &Cart) -> Vec<(u64, i64)> {
    cart.iter().map(|p| (p.id.get(), p.amount)).collect()
}
