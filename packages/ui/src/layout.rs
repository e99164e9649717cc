//! Page chrome shared by every route.

use dioxus::prelude::*;

use crate::auth::{use_auth, LoginButton};
use crate::Navbar;

/// Wraps a page in the navbar and only renders it for a signed-in user.
///
/// While the session is being read a loader is shown; without a session the page is
/// replaced by a sign-in prompt. Pages read the user from [`use_auth`] and receive it
/// as an explicit prop.
#[component]
pub fn DefaultLayout(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    let body = if state.loading {
        rsx! {
            div {
                class: "pageloader is-active is-bottom-to-top",
                span { class: "title", "Loading..." }
            }
        }
    } else if state.user.is_none() {
        rsx! {
            section {
                class: "section has-text-centered",
                h1 { class: "title", "Sign in to manage your products" }
                LoginButton {}
            }
        }
    } else {
        rsx! { {children} }
    };

    rsx! {
        Navbar {
            Link { class: "navbar-item has-text-weight-bold", to: "/", "Storefront" }
            Link { class: "navbar-item", to: "/vendors/products", "Products" }
        }
        main { class: "container", {body} }
    }
}
