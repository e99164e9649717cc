//! # GraphQL backend client
//!
//! The product catalog lives behind an external GraphQL API. This module holds the
//! three operations the storefront uses ([`operations`]) and a thin HTTP client
//! ([`GraphqlClient`]) that posts them as `{ query, variables }` JSON.
//!
//! [`get_client`] returns a process-wide client for the configured endpoint.

mod client;
pub mod operations;

pub use client::{get_client, GraphqlClient};
