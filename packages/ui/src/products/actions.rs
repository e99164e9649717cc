//! Archive and restore, each followed by a refetch.

use api::{ApiError, Product, ProductFilter};

use super::ProductsBackend;

/// A state change a vendor can request for one of their products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    Archive,
    Restore,
}

impl ProductAction {
    pub fn label(self) -> &'static str {
        match self {
            ProductAction::Archive => "Archive",
            ProductAction::Restore => "Restore",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            ProductAction::Archive => "archive",
            ProductAction::Restore => "restore",
        }
    }
}

/// Which half of an action failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The backend rejected the state change; the product is unchanged.
    Mutation(ApiError),
    /// The state change went through but the follow-up query failed.
    Refetch(ApiError),
}

/// Apply `action` to `product_id`, then re-query the list for `filter`.
///
/// The refetch replaces any cache update: the returned list is what the backend
/// reports after the change. If the mutation fails nothing is refetched.
pub async fn run_action<B: ProductsBackend>(
    backend: &B,
    action: ProductAction,
    product_id: &str,
    filter: &ProductFilter,
) -> Result<Vec<Product>, ActionError> {
    let result = match action {
        ProductAction::Archive => backend.archive_product(product_id).await,
        ProductAction::Restore => backend.restore_product(product_id).await,
    };
    let product = result.map_err(|e| {
        tracing::error!(product_id, "failed to {} product: {e}", action.verb());
        ActionError::Mutation(e)
    })?;
    tracing::info!(product_id = %product.id, status = ?product.status, "{} succeeded", action.verb());

    backend.products(filter).await.map_err(|e| {
        tracing::warn!(product_id, "refetch after {} failed: {e}", action.verb());
        ActionError::Refetch(e)
    })
}

/// Notice shown when an action fails.
pub fn failure_notice(action: ProductAction, error: &ActionError) -> String {
    match error {
        ActionError::Mutation(e) => format!("Could not {} product: {e}", action.verb()),
        ActionError::Refetch(e) => format!(
            "Product {}d, but the list could not be refreshed: {e}",
            action.verb()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::testing::{product, FakeBackend};
    use api::{ProductStatus, SessionUser};

    fn filter() -> ProductFilter {
        ProductFilter::for_user(&SessionUser::new("auth0|123"))
    }

    #[tokio::test]
    async fn test_archive_then_refetch() {
        let backend = FakeBackend::new(vec![product("p1", "auth0|123"), product("p2", "auth0|123")])
            .hide_archived();

        let products = run_action(&backend, ProductAction::Archive, "p1", &filter())
            .await
            .unwrap();

        assert_eq!(backend.calls(), ["archive:p1", "products:auth0|123"]);
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2"]);
    }

    #[tokio::test]
    async fn test_restore_then_refetch() {
        let mut archived = product("p3", "auth0|123");
        archived.status = ProductStatus::Archived;
        let backend = FakeBackend::new(vec![product("p1", "auth0|123"), archived]);

        let products = run_action(&backend, ProductAction::Restore, "p3", &filter())
            .await
            .unwrap();

        assert_eq!(backend.calls(), ["restore:p3", "products:auth0|123"]);
        assert!(products.iter().all(|p| p.status == ProductStatus::Active));
    }

    #[tokio::test]
    async fn test_failed_mutation_is_reported_and_not_refetched() {
        let backend = FakeBackend::new(vec![product("p1", "auth0|123")]);

        let error = run_action(&backend, ProductAction::Archive, "missing", &filter())
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ActionError::Mutation(ApiError::GraphQL("Product not found".to_string()))
        );
        assert_eq!(backend.calls(), ["archive:missing"]);
        assert_eq!(
            failure_notice(ProductAction::Archive, &error),
            "Could not archive product: Product not found"
        );
    }

    #[tokio::test]
    async fn test_failed_refetch_after_archive_is_not_a_failed_archive() {
        let backend = FakeBackend::new(vec![product("p1", "auth0|123")]).hide_archived();
        backend.fail_next_queries(1, "Service unavailable");

        let error = run_action(&backend, ProductAction::Archive, "p1", &filter())
            .await
            .unwrap_err();

        assert_eq!(backend.calls(), ["archive:p1", "products:auth0|123"]);
        assert_eq!(
            error,
            ActionError::Refetch(ApiError::GraphQL("Service unavailable".to_string()))
        );
        assert_eq!(
            failure_notice(ProductAction::Archive, &error),
            "Product archived, but the list could not be refreshed: Service unavailable"
        );

        // The archive stuck; the next query no longer lists p1.
        assert!(backend.products(&filter()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_refetch_after_restore_names_the_restore() {
        let mut archived = product("p3", "auth0|123");
        archived.status = ProductStatus::Archived;
        let backend = FakeBackend::new(vec![archived]);
        backend.fail_next_queries(1, "timeout");

        let error = run_action(&backend, ProductAction::Restore, "p3", &filter())
            .await
            .unwrap_err();

        assert_eq!(
            failure_notice(ProductAction::Restore, &error),
            "Product restored, but the list could not be refreshed: timeout"
        );
    }
}
