//! Operation documents and their wire types.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::Product;

const PRODUCT_FIELDS: &str = r#"
    fragment ProductFields on Product {
        _id
        name
        description
        price
        imageUrl
        status
        userId
    }
"#;

/// Products owned by `$userId`.
pub const GET_PRODUCTS: &str = r#"
    query GetProducts($userId: ID!) {
        products(userId: $userId) {
            ...ProductFields
        }
    }
"#;

/// Move a product to the archived state.
pub const ARCHIVE_PRODUCT: &str = r#"
    mutation ArchiveProduct($productId: ID!) {
        product: archiveProduct(productId: $productId) {
            ...ProductFields
        }
    }
"#;

/// Move an archived product back to the active state.
pub const RESTORE_PRODUCT: &str = r#"
    mutation RestoreProduct($productId: ID!) {
        product: restoreProduct(productId: $productId) {
            ...ProductFields
        }
    }
"#;

/// Full document for an operation, with the shared fragment appended.
pub fn document(operation: &str) -> String {
    format!("{operation}{PRODUCT_FIELDS}")
}

/// Request body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<V> {
    pub query: String,
    pub variables: V,
}

impl<V: Serialize> GraphqlRequest<V> {
    pub fn new(operation: &str, variables: V) -> Self {
        Self {
            query: document(operation),
            variables,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Response envelope: `data` and/or `errors`.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Errors win over partial data.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            let messages: Vec<_> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(ApiError::GraphQL(messages.join("; ")));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdVariables {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub product: Product,
}
