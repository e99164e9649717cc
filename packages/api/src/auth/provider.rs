//! The identity provider capability consumed by the auth routes.

use std::future::Future;

use super::AuthError;
use crate::models::SessionUser;

/// Everything needed to send the browser to the provider's hosted login page
/// and to validate the redirect back.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// Provider authorize URL, including `state` and the PKCE challenge.
    pub url: String,
    /// CSRF state expected back on the callback.
    pub state: String,
    /// PKCE verifier for the code exchange.
    pub pkce_verifier: String,
}

/// A redirect-based identity provider.
///
/// Routes only ever see this trait; the provider's token validation stays behind it.
pub trait IdentityProvider: Send + Sync + 'static {
    /// Begin the auth flow.
    fn authorization_request(&self) -> Result<AuthorizationRequest, AuthError>;

    /// Complete the auth flow: trade the authorization code for the signed-in user.
    fn exchange_code(
        &self,
        code: String,
        pkce_verifier: String,
    ) -> impl Future<Output = Result<SessionUser, AuthError>> + Send;

    /// Provider logout URL that returns the browser to `return_to`.
    fn logout_url(&self, return_to: &str) -> Result<String, AuthError>;
}
