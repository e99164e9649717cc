//! The repeating product query.

use std::time::Duration;

use api::{ApiError, Product, ProductFilter};

use super::ProductsBackend;

/// Cadence of the product query.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Query products for `filter` now and then every `interval`, handing each result to
/// `on_result`.
///
/// Runs until dropped. Each tick is a single attempt; a failed tick is reported and the
/// next one runs on schedule.
pub async fn poll_products<B, F>(
    backend: &B,
    filter: ProductFilter,
    interval: Duration,
    mut on_result: F,
) where
    B: ProductsBackend,
    F: FnMut(Result<Vec<Product>, ApiError>),
{
    tracing::debug!(user_id = %filter.user_id, ?interval, "product polling started");
    loop {
        let result = backend.products(&filter).await;
        if let Err(e) = &result {
            tracing::warn!(user_id = %filter.user_id, "product query failed: {e}");
        }
        on_result(result);
        sleep(interval).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
