//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod products;

pub mod views;

pub const STOREFRONT_CSS: Asset = asset!("/assets/storefront.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LoginButton, LogoutButton};

mod layout;
pub use layout::DefaultLayout;

mod filter;
pub use filter::Filter;

mod product_card;
pub use product_card::ProductCardItem;
