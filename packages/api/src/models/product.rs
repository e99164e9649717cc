//! # Product model
//!
//! A [`Product`] is a vendor-owned catalog entry as returned by the GraphQL backend.
//! Field names follow the backend's wire format (`_id`, camelCase), and
//! [`ProductStatus`] mirrors its `ACTIVE` / `ARCHIVED` enum.
//!
//! [`ProductFilter`] is the variables object of the products query. It can only be
//! built from a [`SessionUser`], and [`ProductFilter::authorize`] lets the server reject
//! a filter that names anyone other than the signed-in user.

use serde::{Deserialize, Serialize};

use super::SessionUser;
use crate::error::ApiError;

/// Lifecycle state of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    Archived,
}

impl ProductStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Archived => "Archived",
        }
    }
}

/// A catalog entry owned by a vendor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub status: ProductStatus,
    /// Subject id of the owning vendor.
    pub user_id: String,
}

impl Product {
    pub fn is_archived(&self) -> bool {
        self.status == ProductStatus::Archived
    }

    pub fn is_owned_by(&self, user: &SessionUser) -> bool {
        self.user_id == user.sub
    }

    /// Price formatted as dollars and cents, e.g. `$12.50`.
    pub fn display_price(&self) -> String {
        let sign = if self.price < 0 { "-" } else { "" };
        let cents = self.price.unsigned_abs();
        format!("{sign}${}.{:02}", cents / 100, cents % 100)
    }
}

/// Variables of the products query: whose products to return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub user_id: String,
}

impl ProductFilter {
    /// Filter scoped to the given user.
    pub fn for_user(user: &SessionUser) -> Self {
        Self {
            user_id: user.sub.clone(),
        }
    }

    /// Reject filters that are not scoped to `user`.
    pub fn authorize(&self, user: &SessionUser) -> Result<(), ApiError> {
        if self.user_id == user.sub {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Mug".to_string(),
            description: None,
            price,
            image_url: None,
            status: ProductStatus::Active,
            user_id: "auth0|123".to_string(),
        }
    }

    #[test]
    fn test_product_from_backend_json() {
        let json = r#"{
            "_id": "p1",
            "name": "Mug",
            "description": "Stoneware, 350ml",
            "price": 1250,
            "imageUrl": null,
            "status": "ARCHIVED",
            "userId": "auth0|123"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p1");
        assert!(product.is_archived());
        assert_eq!(product.image_url, None);
        assert!(product.is_owned_by(&SessionUser::new("auth0|123")));
        assert!(!product.is_owned_by(&SessionUser::new("auth0|456")));
    }

    #[test]
    fn test_display_price() {
        assert_eq!(product(1250).display_price(), "$12.50");
        assert_eq!(product(5).display_price(), "$0.05");
        assert_eq!(product(-199).display_price(), "-$1.99");
    }

    #[test]
    fn test_filter_serializes_as_query_variables() {
        let filter = ProductFilter::for_user(&SessionUser::new("auth0|123"));
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, serde_json::json!({ "userId": "auth0|123" }));
    }

    #[test]
    fn test_filter_authorize() {
        let owner = SessionUser::new("auth0|123");
        let filter = ProductFilter::for_user(&owner);
        assert!(filter.authorize(&owner).is_ok());
        assert_eq!(
            filter.authorize(&SessionUser::new("auth0|456")),
            Err(ApiError::Forbidden)
        );
    }
}
