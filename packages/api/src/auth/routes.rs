//! # Auth routes
//!
//! | Route | Handler | Success |
//! |-------|---------|---------|
//! | `GET /api/login` | [`login`] | `303` to the provider's hosted login page |
//! | `GET /api/callback` | [`callback`] | `303` to the configured `redirect_to` (`/`) |
//! | `GET /api/logout` | [`logout`] | `303` to the provider's logout endpoint |
//!
//! Login and callback share one failure policy: whatever goes wrong is answered with
//! the error's own status (or `500`) and its raw message as the body. Callback
//! failures are also logged. Nothing is retried.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_sessions::Session;

use super::{AuthError, IdentityProvider, PendingLogin, PENDING_LOGIN_KEY, SESSION_USER_KEY};

/// Shared state of the auth routes.
pub struct AuthRoutes<P> {
    provider: Arc<P>,
    redirect_to: String,
    logout_return_to: String,
}

impl<P> Clone for AuthRoutes<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            redirect_to: self.redirect_to.clone(),
            logout_return_to: self.logout_return_to.clone(),
        }
    }
}

impl<P: IdentityProvider> AuthRoutes<P> {
    /// `redirect_to` is where a completed login lands; `logout_return_to` is the
    /// absolute URL the provider sends the browser back to after logout.
    pub fn new(
        provider: Arc<P>,
        redirect_to: impl Into<String>,
        logout_return_to: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            redirect_to: redirect_to.into(),
            logout_return_to: logout_return_to.into(),
        }
    }
}

/// Build the `/api/login`, `/api/callback` and `/api/logout` routes.
///
/// The router must be wrapped in a `tower_sessions::SessionManagerLayer`.
pub fn auth_routes<P: IdentityProvider>(state: AuthRoutes<P>) -> Router {
    Router::new()
        .route("/api/login", get(login::<P>))
        .route("/api/callback", get(callback::<P>))
        .route("/api/logout", get(logout::<P>))
        .with_state(state)
}

/// Query parameters of the provider's redirect back to us.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Begin login: remember the pending request and redirect to the provider.
pub async fn login<P: IdentityProvider>(
    State(routes): State<AuthRoutes<P>>,
    session: Session,
) -> Response {
    match begin_login(routes.provider.as_ref(), &session).await {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(e) => {
            tracing::warn!(status = %e.status(), "login failed: {e}");
            e.into_response()
        }
    }
}

/// Complete login: validate the callback, establish the session and redirect home.
pub async fn callback<P: IdentityProvider>(
    State(routes): State<AuthRoutes<P>>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Response {
    match complete_login(routes.provider.as_ref(), &session, params).await {
        Ok(()) => Redirect::to(&routes.redirect_to).into_response(),
        Err(e) => {
            tracing::error!(status = %e.status(), "login callback failed: {e}");
            e.into_response()
        }
    }
}

/// Clear the local session and end the provider session.
pub async fn logout<P: IdentityProvider>(
    State(routes): State<AuthRoutes<P>>,
    session: Session,
) -> Response {
    match end_session(&routes, &session).await {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(e) => {
            tracing::error!(status = %e.status(), "logout failed: {e}");
            e.into_response()
        }
    }
}

async fn end_session<P: IdentityProvider>(
    routes: &AuthRoutes<P>,
    session: &Session,
) -> Result<String, AuthError> {
    session.flush().await.map_err(AuthError::session)?;
    routes.provider.logout_url(&routes.logout_return_to)
}

async fn begin_login<P: IdentityProvider>(
    provider: &P,
    session: &Session,
) -> Result<String, AuthError> {
    let request = provider.authorization_request()?;
    session
        .insert(
            PENDING_LOGIN_KEY,
            PendingLogin {
                state: request.state,
                pkce_verifier: request.pkce_verifier,
            },
        )
        .await
        .map_err(AuthError::session)?;
    Ok(request.url)
}

async fn complete_login<P: IdentityProvider>(
    provider: &P,
    session: &Session,
    params: CallbackParams,
) -> Result<(), AuthError> {
    if let Some(error) = params.error {
        return Err(AuthError::with_status(
            axum::http::StatusCode::UNAUTHORIZED,
            params.error_description.unwrap_or(error),
        ));
    }
    let code = params
        .code
        .ok_or_else(|| AuthError::bad_request("Missing authorization code"))?;
    let state = params
        .state
        .ok_or_else(|| AuthError::bad_request("Missing state parameter"))?;

    // A pending login is single use, whatever the outcome.
    let pending: PendingLogin = session
        .remove(PENDING_LOGIN_KEY)
        .await
        .map_err(AuthError::session)?
        .ok_or_else(|| AuthError::bad_request("No login in progress for this session"))?;
    if pending.state != state {
        return Err(AuthError::bad_request("OAuth state mismatch"));
    }

    let user = provider.exchange_code(code, pending.pkce_verifier).await?;

    session.cycle_id().await.map_err(AuthError::session)?;
    session
        .insert(SESSION_USER_KEY, &user)
        .await
        .map_err(AuthError::session)?;

    tracing::info!(sub = %user.sub, "user signed in");
    Ok(())
}
