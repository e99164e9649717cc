//! Rendering states of the product list.

use api::{ApiError, Product, SessionUser};

/// What the product list shows.
///
/// The list starts in `Loading` and never returns to it: every query result
/// replaces the previous state, so an `Error` lasts until the next successful poll.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductListState {
    #[default]
    Loading,
    Error(String),
    Ready(Vec<Product>),
}

impl ProductListState {
    /// State for a query result, keeping only products owned by `user`.
    pub fn from_result(result: Result<Vec<Product>, ApiError>, user: &SessionUser) -> Self {
        match result {
            Ok(products) => ProductListState::Ready(scope_to_user(products, user)),
            Err(e) => ProductListState::Error(e.to_string()),
        }
    }
}

// Assertion helpers.
#[cfg(test)]
impl ProductListState {
    /// Products to render as cards; empty unless `Ready`.
    pub fn cards(&self) -> &[Product] {
        match self {
            ProductListState::Ready(products) => products,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProductListState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ProductListState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Drop any product not owned by `user`.
pub fn scope_to_user(products: Vec<Product>, user: &SessionUser) -> Vec<Product> {
    let total = products.len();
    let owned: Vec<Product> = products
        .into_iter()
        .filter(|product| product.is_owned_by(user))
        .collect();
    if owned.len() != total {
        tracing::warn!(
            sub = %user.sub,
            dropped = total - owned.len(),
            "backend returned products owned by another user"
        );
    }
    owned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::testing::product;

    fn user() -> SessionUser {
        SessionUser::new("auth0|123")
    }

    #[test]
    fn test_loading_renders_no_cards() {
        let state = ProductListState::default();
        assert!(state.is_loading());
        assert!(state.cards().is_empty());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_error_renders_message_and_no_cards() {
        let state = ProductListState::from_result(
            Err(ApiError::GraphQL("Service unavailable".to_string())),
            &user(),
        );
        assert_eq!(state.error_message(), Some("Service unavailable"));
        assert!(state.cards().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_one_card_per_product() {
        let state = ProductListState::from_result(
            Ok(vec![product("p1", "auth0|123"), product("p2", "auth0|123")]),
            &user(),
        );
        let ids: Vec<_> = state.cards().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn test_foreign_products_never_render() {
        let state = ProductListState::from_result(
            Ok(vec![product("p1", "auth0|123"), product("x9", "auth0|999")]),
            &user(),
        );
        assert_eq!(state.cards().len(), 1);
        assert!(state.cards().iter().all(|p| p.user_id == "auth0|123"));
    }

    #[test]
    fn test_next_success_replaces_error() {
        let user = user();
        let mut state = ProductListState::from_result(Err(ApiError::MissingData), &user);
        assert!(state.error_message().is_some());

        state = ProductListState::from_result(Ok(vec![product("p1", "auth0|123")]), &user);
        assert_eq!(state.error_message(), None);
        assert_eq!(state.cards().len(), 1);
    }
}
