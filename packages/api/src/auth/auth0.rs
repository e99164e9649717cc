//! # Auth0 OAuth 2.0 implementation
//!
//! Implements the Authorization Code flow with PKCE against an Auth0 tenant.
//!
//! ## Flow
//!
//! 1. **[`authorization_request`](Auth0Provider::authorization_request)** builds the
//!    `/authorize` URL with the configured scopes (and `audience`, when set) plus a
//!    random CSRF state and PKCE challenge. The caller keeps the state and verifier in
//!    the user's session until the callback arrives.
//!
//! 2. **[`exchange_code`](Auth0Provider::exchange_code)** trades the authorization code
//!    and PKCE verifier for an access token at `/oauth/token`, then fetches the
//!    profile from `/userinfo`.
//!
//! 3. **[`logout_url`](Auth0Provider::logout_url)** points at `/v2/logout` so the
//!    provider session ends together with ours.

use axum::http::StatusCode;
use oauth2::basic::BasicClient;
use oauth2::url::Url;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, RequestTokenError, Scope, TokenResponse,
};

use super::config::OAuthConfig;
use super::{AuthError, AuthorizationRequest, IdentityProvider};
use crate::models::SessionUser;
use crate::settings::Settings;

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Auth0 identity provider.
pub struct Auth0Provider {
    config: OAuthConfig,
    client: ConfiguredClient,
    http: reqwest::Client,
}

impl Auth0Provider {
    /// Create a provider for the tenant named in `settings`.
    pub fn new(settings: &Settings) -> Result<Self, AuthError> {
        let config = OAuthConfig::auth0(settings)?;
        let client = BasicClient::new(config.client_id.clone())
            .set_client_secret(config.client_secret.clone())
            .set_auth_uri(config.auth_url.clone())
            .set_token_uri(config.token_url.clone())
            .set_redirect_uri(config.redirect_url.clone());

        // The token endpoint must not be followed through redirects.
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthError::new(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            client,
            http,
        })
    }

    async fn fetch_user(&self, access_token: &str) -> Result<SessionUser, AuthError> {
        let response = self
            .http
            .get(self.config.userinfo_url.clone())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::new(format!("Userinfo request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AuthError::new(format!(
                "Userinfo request failed with status {}",
                response.status()
            )));
        }

        response
            .json::<SessionUser>()
            .await
            .map_err(|e| AuthError::new(format!("Invalid userinfo response: {e}")))
    }
}

impl IdentityProvider for Auth0Provider {
    fn authorization_request(&self) -> Result<AuthorizationRequest, AuthError> {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let mut request = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(self.config.scopes.iter().cloned().map(Scope::new))
            .set_pkce_challenge(pkce_challenge);
        if let Some(audience) = &self.config.audience {
            request = request.add_extra_param("audience", audience.clone());
        }
        let (auth_url, csrf_state) = request.url();

        Ok(AuthorizationRequest {
            url: auth_url.to_string(),
            state: csrf_state.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        })
    }

    async fn exchange_code(
        &self,
        code: String,
        pkce_verifier: String,
    ) -> Result<SessionUser, AuthError> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&self.http)
            .await
            .map_err(|e| match e {
                RequestTokenError::ServerResponse(response) => AuthError::with_status(
                    StatusCode::UNAUTHORIZED,
                    format!("Token exchange rejected: {response}"),
                ),
                other => AuthError::new(format!("Token exchange failed: {other}")),
            })?;

        self.fetch_user(token.access_token().secret()).await
    }

    fn logout_url(&self, return_to: &str) -> Result<String, AuthError> {
        logout_url(&self.config.logout_url, self.config.client_id.as_str(), return_to)
    }
}

fn logout_url(base: &Url, client_id: &str, return_to: &str) -> Result<String, AuthError> {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("returnTo", return_to);
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn settings() -> Settings {
        Config::builder()
            .add_source(File::from_str(
                r#"
                [auth0]
                domain = "tenant.example.com"
                client_id = "client-1"
                client_secret = "secret"
                audience = "https://api.storefront.example"
                scope = "openid profile email"

                [app]
                base_url = "http://localhost:8080"
                redirect_to = "/"

                [graphql]
                endpoint = "http://localhost:4000/graphql"

                [session]
                secure = false
                inactivity_days = 7
                "#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_authorization_request() {
        let provider = Auth0Provider::new(&settings()).unwrap();
        let request = provider.authorization_request().unwrap();

        let url = Url::parse(&request.url).unwrap();
        assert_eq!(url.host_str(), Some("tenant.example.com"));
        assert_eq!(url.path(), "/authorize");

        let params: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(params["client_id"], "client-1");
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["redirect_uri"], "http://localhost:8080/api/callback");
        assert_eq!(params["scope"], "openid profile email");
        assert_eq!(params["audience"], "https://api.storefront.example");
        assert_eq!(params["code_challenge_method"], "S256");
        assert_eq!(params["state"], request.state);
        assert!(!request.pkce_verifier.is_empty());
    }

    #[test]
    fn test_each_request_gets_a_fresh_state() {
        let provider = Auth0Provider::new(&settings()).unwrap();
        let first = provider.authorization_request().unwrap();
        let second = provider.authorization_request().unwrap();
        assert_ne!(first.state, second.state);
        assert_ne!(first.pkce_verifier, second.pkce_verifier);
    }

    #[test]
    fn test_logout_url() {
        let provider = Auth0Provider::new(&settings()).unwrap();
        let url = provider.logout_url("http://localhost:8080/").unwrap();
        assert_eq!(
            url,
            "https://tenant.example.com/v2/logout?client_id=client-1&returnTo=http%3A%2F%2Flocalhost%3A8080%2F"
        );
    }
}
