//! In-memory backend for tests.

use std::sync::Mutex;

use api::{ApiError, Product, ProductFilter, ProductStatus};

use super::ProductsBackend;

pub fn product(id: &str, user_id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        description: None,
        price: 1000,
        image_url: None,
        status: ProductStatus::Active,
        user_id: user_id.to_string(),
    }
}

/// Backend over a product list that records every call.
#[derive(Debug, Default)]
pub struct FakeBackend {
    products: Mutex<Vec<Product>>,
    calls: Mutex<Vec<String>>,
    failing_queries: Mutex<Option<(usize, String)>>,
    hide_archived: bool,
}

impl FakeBackend {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Default::default()
        }
    }

    /// Leave archived products out of query results.
    pub fn hide_archived(mut self) -> Self {
        self.hide_archived = true;
        self
    }

    /// Fail the next `count` product queries with `message`.
    pub fn fail_next_queries(&self, count: usize, message: &str) {
        *self.failing_queries.lock().unwrap() = Some((count, message.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn set_status(&self, product_id: &str, status: ProductStatus) -> Result<Product, ApiError> {
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| ApiError::GraphQL("Product not found".to_string()))?;
        product.status = status;
        Ok(product.clone())
    }
}

impl ProductsBackend for FakeBackend {
    async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("products:{}", filter.user_id));

        let mut failing = self.failing_queries.lock().unwrap();
        if let Some((remaining, message)) = failing.as_mut() {
            let message = message.clone();
            *remaining -= 1;
            if *remaining == 0 {
                *failing = None;
            }
            return Err(ApiError::GraphQL(message));
        }

        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == filter.user_id)
            .filter(|p| !(self.hide_archived && p.is_archived()))
            .cloned()
            .collect())
    }

    async fn archive_product(&self, product_id: &str) -> Result<Product, ApiError> {
        self.calls.lock().unwrap().push(format!("archive:{product_id}"));
        self.set_status(product_id, ProductStatus::Archived)
    }

    async fn restore_product(&self, product_id: &str) -> Result<Product, ApiError> {
        self.calls.lock().unwrap().push(format!("restore:{product_id}"));
        self.set_status(product_id, ProductStatus::Active)
    }
}
