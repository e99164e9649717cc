use dioxus::prelude::*;

use crate::auth::{use_auth, LoginButton, LogoutButton};

use crate::STOREFRONT_CSS;

/// Top bar with the brand slot on the left and the session controls on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();
    let user_name = state.user.as_ref().map(|user| user.display_name().to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: STOREFRONT_CSS }
        nav {
            class: "navbar",
            div { class: "navbar-brand", {children} }
            div {
                class: "navbar-end",
                if let Some(name) = user_name {
                    span { class: "navbar-item", "{name}" }
                    LogoutButton {}
                } else if !state.loading {
                    LoginButton {}
                }
            }
        }
    }
}
