//! Session keys and the values stored under them.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::ApiError;
use crate::models::SessionUser;

/// Key for storing the signed-in [`SessionUser`] in the session.
pub const SESSION_USER_KEY: &str = "user";

/// Key for the login that is waiting for its provider callback.
pub const PENDING_LOGIN_KEY: &str = "pending_login";

/// CSRF state and PKCE verifier kept between `/api/login` and `/api/callback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingLogin {
    pub state: String,
    pub pkce_verifier: String,
}

/// Read the signed-in user, if any.
pub async fn current_user(
    session: &Session,
) -> Result<Option<SessionUser>, tower_sessions::session::Error> {
    session.get(SESSION_USER_KEY).await
}

/// Read the signed-in user or fail with [`ApiError::Unauthorized`].
pub async fn require_user(session: &Session) -> Result<SessionUser, ApiError> {
    current_user(session)
        .await
        .map_err(|e| ApiError::Server(e.to_string()))?
        .ok_or(ApiError::Unauthorized)
}
