//! Remote collaborators: the product catalog and the stock API.

use async_trait::async_trait;
use cartkit_commerce::{CatalogProduct, ProductId, Stock};
use cartkit_data::{FetchClient, FetchError};

/// Source of product descriptive data.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch a product by id.
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, FetchError>;
}

/// Source of remote stock levels.
///
/// Called fresh for every check; implementations must not cache.
#[async_trait]
pub trait StockLookup: Send + Sync {
    /// Fetch the units available for a product.
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError>;
}

/// Catalog and stock lookups against the JSON product API.
///
/// - `GET products/{id}` for product data
/// - `GET stock/{id}` for `{ "amount": n }`
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: FetchClient,
}

impl HttpProductApi {
    /// Create an API client. Relative paths resolve against the client's base URL.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Path of a product resource.
    pub fn product_path(product_id: ProductId) -> String {
        format!("products/{}", product_id)
    }

    /// Path of a stock resource.
    pub fn stock_path(product_id: ProductId) -> String {
        format!("stock/{}", product_id)
    }
}

#[async_trait]
impl Catalog for HttpProductApi {
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, FetchError> {
        let response = self
            .client
            .get(Self::product_path(product_id))
            .send()
            .await?
            .error_for_status()?;
        response.json()
    }
}

#[async_trait]
impl StockLookup for HttpProductApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, FetchError> {
        let response = self
            .client
            .get(Self::stock_path(product_id))
            .send()
            .await?
            .error_for_status()?;
        response.json()
    }
}
