//! HTTP client for the GraphQL backend.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::OnceCell;

use super::operations::{
    GraphqlRequest, GraphqlResponse, ProductData, ProductIdVariables, ProductsData,
    ARCHIVE_PRODUCT, GET_PRODUCTS, RESTORE_PRODUCT,
};
use crate::error::ApiError;
use crate::models::{Product, ProductFilter};
use crate::settings::get_settings;

static CLIENT: OnceCell<GraphqlClient> = OnceCell::const_new();

/// Get or initialize the GraphQL client for the configured endpoint.
pub async fn get_client() -> Result<&'static GraphqlClient, ApiError> {
    CLIENT
        .get_or_try_init(|| async {
            let settings = get_settings()
                .await
                .map_err(|e| ApiError::Server(e.to_string()))?;
            Ok(GraphqlClient::new(settings.graphql.endpoint.clone()))
        })
        .await
}

/// Posts operations to a single GraphQL endpoint. Every call is a single attempt.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Products owned by the filter's user.
    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let data: ProductsData = self.execute(GET_PRODUCTS, filter).await?;
        Ok(data.products)
    }

    pub async fn archive_product(&self, product_id: &str) -> Result<Product, ApiError> {
        self.mutate(ARCHIVE_PRODUCT, product_id).await
    }

    pub async fn restore_product(&self, product_id: &str) -> Result<Product, ApiError> {
        self.mutate(RESTORE_PRODUCT, product_id).await
    }

    async fn mutate(&self, operation: &str, product_id: &str) -> Result<Product, ApiError> {
        let variables = ProductIdVariables {
            product_id: product_id.to_string(),
        };
        let data: ProductData = self.execute(operation, variables).await?;
        Ok(data.product)
    }

    async fn execute<V, T>(&self, operation: &str, variables: V) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest::new(operation, variables))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, %status, "GraphQL request rejected");
            return Err(ApiError::Transport(format!("HTTP status {status}")));
        }

        response
            .json::<GraphqlResponse<T>>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .into_result()
    }
}
