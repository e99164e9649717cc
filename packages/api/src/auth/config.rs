//! OAuth configuration derived from [`Settings`].

use oauth2::url::Url;
use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use super::AuthError;
use crate::settings::Settings;

/// OAuth provider configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
    pub userinfo_url: Url,
    pub logout_url: Url,
    pub scopes: Vec<String>,
    pub audience: Option<String>,
}

impl OAuthConfig {
    /// Build the Auth0 endpoint set for the configured tenant.
    pub fn auth0(settings: &Settings) -> Result<Self, AuthError> {
        let auth0 = &settings.auth0;
        if auth0.domain.trim().is_empty() {
            return Err(AuthError::new("auth0.domain is not configured"));
        }
        let base = issuer_base(&auth0.domain);

        Ok(Self {
            client_id: ClientId::new(auth0.client_id.clone()),
            client_secret: ClientSecret::new(auth0.client_secret.clone()),
            auth_url: AuthUrl::new(format!("{base}/authorize")).map_err(invalid_url)?,
            token_url: TokenUrl::new(format!("{base}/oauth/token")).map_err(invalid_url)?,
            redirect_url: RedirectUrl::new(settings.callback_url()).map_err(invalid_url)?,
            userinfo_url: Url::parse(&format!("{base}/userinfo")).map_err(invalid_url)?,
            logout_url: Url::parse(&format!("{base}/v2/logout")).map_err(invalid_url)?,
            scopes: auth0.scope.split_whitespace().map(str::to_string).collect(),
            audience: auth0.audience.clone().filter(|a| !a.is_empty()),
        })
    }
}

/// `https://` base URL for a tenant domain, with any trailing slash removed.
fn issuer_base(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.starts_with("https://") || domain.starts_with("http://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    }
}

fn invalid_url(e: oauth2::url::ParseError) -> AuthError {
    AuthError::new(format!("Invalid identity provider URL: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_base() {
        assert_eq!(issuer_base("tenant.auth0.com"), "https://tenant.auth0.com");
        assert_eq!(issuer_base("https://tenant.auth0.com/"), "https://tenant.auth0.com");
        assert_eq!(issuer_base("http://localhost:3001"), "http://localhost:3001");
    }
}
