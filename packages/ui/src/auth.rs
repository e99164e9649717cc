//! Authentication context and hooks for the UI.

use api::SessionUser;
use dioxus::prelude::*;

use crate::icons::{FaRightFromBracket, FaRightToBracket};
use crate::Icon;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates once the session has been read.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that reads the session user on mount.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::error!("Failed to read session: {}", e);
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Link that starts the provider login flow at `/api/login`.
#[component]
pub fn LoginButton(
    #[props(default = "Log in".to_string())] label: String,
    #[props(default = "button is-primary".to_string())] class: String,
) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "/api/login",
            Icon { icon: FaRightToBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

/// Link that ends both the local and the provider session.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "button is-light".to_string())] class: String,
) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "/api/logout",
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
