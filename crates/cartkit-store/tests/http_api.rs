//! The HTTP product API against a canned local server.

use cartkit_cache::Cache;
use cartkit_commerce::ProductId;
use cartkit_data::{FetchClient, FetchError};
use cartkit_store::{
    CartError, CartStore, Catalog, ChannelNotifier, HttpProductApi, Notice, StockLookup,
    UpdateProductAmount,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve `routes` (path -> (status, body)) until the test ends.
async fn serve(routes: HashMap<&'static str, (u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let mut read = 0;
                while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => read += n,
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = routes.get(path).copied().unwrap_or((404, "{}"));
                let reason = if status == 200 { "OK" } else { "Not Found" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

fn api(base_url: String) -> Arc<HttpProductApi> {
    Arc::new(HttpProductApi::new(FetchClient::new().with_base_url(base_url)))
}

#[tokio::test]
async fn fetches_product_and_stock() {
    let base = serve(HashMap::from([
        ("/products/1", (200, r#"{"id":1,"title":"Shoe","price":179.9,"image":"shoe.jpg"}"#)),
        ("/stock/1", (200, r#"{"id":1,"amount":3}"#)),
    ]))
    .await;
    let api = api(base);

    let product = api.product(ProductId::new(1)).await.unwrap();
    assert_eq!(product.id, ProductId::new(1));
    assert_eq!(product.fields["image"], "shoe.jpg");

    let stock = api.stock(ProductId::new(1)).await.unwrap();
    assert_eq!(stock.amount, 3);
}

#[tokio::test]
async fn missing_resource_is_http_404() {
    let base = serve(HashMap::new()).await;

    let err = api(base).stock(ProductId::new(8)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn unexpected_body_is_parse_error() {
    let base = serve(HashMap::from([("/stock/1", (200, r#"{"quantity":3}"#))])).await;

    let err = api(base).stock(ProductId::new(1)).await.unwrap_err();
    assert!(matches!(err, FetchError::ParseError(_)));
}

#[tokio::test]
async fn store_runs_end_to_end_over_http() {
    let base = serve(HashMap::from([
        ("/products/1", (200, r#"{"id":1,"title":"Shoe"}"#)),
        ("/stock/1", (200, r#"{"id":1,"amount":2}"#)),
    ]))
    .await;
    let api = api(base);
    let (notifier, mut notices) = ChannelNotifier::channel();
    let store = CartStore::builder(Cache::memory(), api.clone(), api)
        .notifier(notifier)
        .open()
        .unwrap();

    store.add_product(ProductId::new(1)).await.unwrap();
    store.add_product(ProductId::new(1)).await.unwrap();
    let err = store.add_product(ProductId::new(1)).await.unwrap_err();
    assert!(err.is_out_of_stock());

    let err = store
        .update_product_amount(UpdateProductAmount::new(ProductId::new(1), 3))
        .await
        .unwrap_err();
    assert!(err.is_out_of_stock());

    let err = store.add_product(ProductId::new(2)).await.unwrap_err();
    assert!(matches!(err, CartError::Remote(_)));

    assert_eq!(store.cart().amount_of(ProductId::new(1)), Some(2));
    assert_eq!(notices.recv().await, Some(Notice::OutOfStock));
    assert_eq!(notices.recv().await, Some(Notice::OutOfStock));
    assert_eq!(notices.recv().await, Some(Notice::AddFailed));
}
