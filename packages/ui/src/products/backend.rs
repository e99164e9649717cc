//! The operations the product list needs from the outside world.

use std::future::Future;

use api::{ApiError, Product, ProductFilter};

/// Async interface for reading and changing products.
pub trait ProductsBackend {
    fn products(
        &self,
        filter: &ProductFilter,
    ) -> impl Future<Output = Result<Vec<Product>, ApiError>>;
    fn archive_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Product, ApiError>>;
    fn restore_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Product, ApiError>>;
}

/// Backend that goes through the `api` server functions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ServerFnBackend;

impl ProductsBackend for ServerFnBackend {
    async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        api::get_products(filter.clone())
            .await
            .map_err(|e| ApiError::Server(e.to_string()))
    }

    async fn archive_product(&self, product_id: &str) -> Result<Product, ApiError> {
        api::archive_product(product_id.to_string())
            .await
            .map_err(|e| ApiError::Server(e.to_string()))
    }

    async fn restore_product(&self, product_id: &str) -> Result<Product, ApiError> {
        api::restore_product(product_id.to_string())
            .await
            .map_err(|e| ApiError::Server(e.to_string()))
    }
}
