//! Catalog sources: the seam between the query layer and whatever transport
//! actually fetches products.

use std::future::Future;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::FetchError;

/// Result type for catalog fetches.
pub type FetchResult<T> = Result<T, FetchError>;

/// Something that can produce the full product catalog.
///
/// Timeouts and retries are the source's business. Any `Err` is treated
/// by `CatalogQuery` as a fetch failure.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog.
    async fn fetch_products(&self) -> FetchResult<Vec<Product>>;
}

/// A catalog source backed by a zero-argument async closure.
pub struct FnSource<F> {
    fetch: F,
}

/// Wrap a fetch function as a [`CatalogSource`].
///
/// ```rust,ignore
/// let source = from_fn(|| async { http_get_products().await });
/// catalog.load(&source).await;
/// ```
pub fn from_fn<F, Fut>(fetch: F) -> FnSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = FetchResult<Vec<Product>>> + Send + 'static,
{
    FnSource { fetch }
}

#[async_trait]
impl<F, Fut> CatalogSource for FnSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = FetchResult<Vec<Product>>> + Send + 'static,
{
    async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
        (self.fetch)().await
    }
}

/// Serves a fixed product list (for development/testing).
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    /// Create a source that always returns `products`.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}

/// Body of the products endpoint: `{"products": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductsResponse {
    /// The catalog.
    pub products: Vec<Product>,
}

impl ProductsResponse {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> FetchResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Take the product list out of the envelope.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl FromStr for ProductsResponse {
    type Err = FetchError;

    fn from_str(body: &str) -> FetchResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fn_source_calls_closure() {
        let source = from_fn(|| {
            futures::future::ready(Ok::<_, FetchError>(vec![Product::new("1", "Caneca")]))
        });
        let products = source.fetch_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Caneca");
    }

    #[tokio::test]
    async fn test_fn_source_propagates_error() {
        let source = from_fn(|| async { Err::<Vec<Product>, _>(FetchError::Timeout) });
        assert_eq!(source.fetch_products().await, Err(FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new(vec![Product::new("1", "A"), Product::new("2", "B")]);
        assert_eq!(source.fetch_products().await.unwrap().len(), 2);
        assert_eq!(source.fetch_products().await.unwrap().len(), 2);
    }

    #[test]
    fn test_products_response_decoding() {
        let body = r#"{"products":[{"id":"1","title":"Meu relógio","price":"10.00"}]}"#;
        let products = ProductsResponse::from_slice(body.as_bytes())
            .unwrap()
            .into_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Meu relógio");
        assert_eq!(products[0].price(), Some(10.0));
    }

    #[test]
    fn test_products_response_rejects_garbage() {
        let err = "<html>oops</html>".parse::<ProductsResponse>().unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
