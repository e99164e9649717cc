//! # API crate — shared fullstack server functions for the storefront
//!
//! This crate defines every Dioxus server function that the web frontend calls, along
//! with the server-side modules behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Identity provider capability, Auth0 implementation, `/api/login`, `/api/callback` and `/api/logout` routes |
//! | [`error`] | — | [`ApiError`], shared by server functions and the UI |
//! | [`graphql`] | `server` | Client for the external GraphQL product backend |
//! | [`models`] | — | [`SessionUser`], [`Product`] and [`ProductFilter`] |
//! | [`settings`] | `server` | Layered configuration (defaults, `storefront.toml`, environment) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Session**: `get_current_user`
//! - **Products**: `get_products`, `archive_product`, `restore_product`
//!
//! Product functions require a signed-in user, and `get_products` only answers for a
//! filter scoped to that user. Archive and restore trust the GraphQL backend to check
//! that the product belongs to the caller.

use dioxus::prelude::*;

pub mod auth;
pub mod error;
#[cfg(feature = "server")]
pub mod graphql;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use error::ApiError;
pub use models::{Product, ProductFilter, ProductStatus, SessionUser};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    auth::current_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    Ok(None)
}

/// List the signed-in user's products.
#[cfg(feature = "server")]
#[post("/api/products", session: tower_sessions::Session)]
pub async fn get_products(filter: ProductFilter) -> Result<Vec<Product>, ServerFnError> {
    let user = auth::require_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    if let Err(e) = filter.authorize(&user) {
        tracing::warn!(sub = %user.sub, requested = %filter.user_id, "rejected product query");
        return Err(ServerFnError::new(e.to_string()));
    }

    let client = graphql::get_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    client
        .products(&filter)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/products")]
pub async fn get_products(filter: ProductFilter) -> Result<Vec<Product>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Archive one of the signed-in user's products.
///
/// Only a signed-in session is required here; ownership of `product_id` is
/// enforced by the GraphQL backend.
#[cfg(feature = "server")]
#[post("/api/products/archive", session: tower_sessions::Session)]
pub async fn archive_product(product_id: String) -> Result<Product, ServerFnError> {
    let user = auth::require_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let client = graphql::get_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let product = client
        .archive_product(&product_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(sub = %user.sub, product_id = %product.id, "product archived");
    Ok(product)
}

#[cfg(not(feature = "server"))]
#[post("/api/products/archive")]
pub async fn archive_product(product_id: String) -> Result<Product, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Restore one of the signed-in user's archived products.
///
/// As with [`archive_product`], ownership is left to the GraphQL backend.
#[cfg(feature = "server")]
#[post("/api/products/restore", session: tower_sessions::Session)]
pub async fn restore_product(product_id: String) -> Result<Product, ServerFnError> {
    let user = auth::require_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let client = graphql::get_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let product = client
        .restore_product(&product_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(sub = %user.sub, product_id = %product.id, "product restored");
    Ok(product)
}

#[cfg(not(feature = "server"))]
#[post("/api/products/restore")]
pub async fn restore_product(product_id: String) -> Result<Product, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
