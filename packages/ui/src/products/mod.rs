//! # Products: logic behind the vendor product list
//!
//! Everything here is free of rendering so it can be driven from tests:
//!
//! - [`ProductListState`]: the `Loading` / `Error` / `Ready` state machine the view renders.
//! - [`ProductsBackend`]: the three operations the view needs; [`ServerFnBackend`] calls
//!   the `api` server functions.
//! - [`poll_products`]: the repeating product query. It never returns; it stops when
//!   the future is dropped, which for the view means when its scope unmounts.
//! - [`run_action`]: archive or restore, then refetch the list for the same user. [`ActionError`]
//!   tells a rejected change apart from a failed refetch.

mod actions;
mod backend;
mod poll;
mod state;

#[cfg(test)]
mod testing;

pub use actions::{failure_notice, run_action, ActionError, ProductAction};
pub use backend::{ProductsBackend, ServerFnBackend};
pub use poll::{poll_products, DEFAULT_POLL_INTERVAL};
pub use state::{scope_to_user, ProductListState};
