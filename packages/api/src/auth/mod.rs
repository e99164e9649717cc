//! Authentication against the external identity provider.
//!
//! The routes in [`routes`] only depend on the [`IdentityProvider`] capability;
//! [`Auth0Provider`] is the production implementation.

#[cfg(feature = "server")]
mod auth0;
#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
mod provider;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use auth0::Auth0Provider;
#[cfg(feature = "server")]
pub use config::OAuthConfig;
#[cfg(feature = "server")]
pub use error::AuthError;
#[cfg(feature = "server")]
pub use provider::{AuthorizationRequest, IdentityProvider};
#[cfg(feature = "server")]
pub use routes::{auth_routes, AuthRoutes};
#[cfg(feature = "server")]
pub use session::{current_user, require_user, PendingLogin, PENDING_LOGIN_KEY, SESSION_USER_KEY};
