use dioxus::prelude::*;

use crate::auth::{use_auth, LoginButton};

/// Landing page: a link to the product list, or a sign-in prompt.
#[component]
pub fn HomeView() -> Element {
    let auth = use_auth();
    let signed_in = auth().user.is_some();

    rsx! {
        section {
            class: "hero is-medium",
            div {
                class: "hero-body has-text-centered",
                h1 { class: "title", "Storefront" }
                p { class: "subtitle", "Manage the products you sell." }
                if signed_in {
                    Link { class: "button is-primary", to: "/vendors/products", "Your products" }
                } else {
                    LoginButton {}
                }
            }
        }
    }
}
