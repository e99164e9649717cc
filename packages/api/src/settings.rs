//! # Settings: layered runtime configuration
//!
//! Settings are assembled with the [`config`] crate, lowest priority first:
//!
//! 1. built-in defaults (everything except the Auth0 client credentials),
//! 2. an optional `storefront.toml` in the working directory,
//! 3. environment variables prefixed with `STOREFRONT`, using `__` as the section
//!    separator (`STOREFRONT__AUTH0__CLIENT_SECRET`). A `.env` file is loaded first
//!    through `dotenvy`.
//!
//! [`get_settings`] caches the result for the lifetime of the process.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tokio::sync::OnceCell;

static SETTINGS: OnceCell<Settings> = OnceCell::const_new();

/// Identity provider tenant and client registration.
#[derive(Debug, Clone, Deserialize)]
pub struct Auth0Settings {
    /// Tenant domain, e.g. `my-tenant.eu.auth0.com`. A full `https://` base URL is accepted too.
    pub domain: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub audience: Option<String>,
    pub scope: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Public base URL of this application; the OAuth callback lives under it.
    pub base_url: String,
    /// Where the browser lands after a successful login callback.
    pub redirect_to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlSettings {
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub secure: bool,
    pub inactivity_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub auth0: Auth0Settings,
    pub app: AppSettings,
    pub graphql: GraphqlSettings,
    pub session: SessionSettings,
}

impl Settings {
    /// Load settings from defaults, `storefront.toml` and the environment.
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::with_defaults()?
            .add_source(
                File::with_name("storefront")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("STOREFRONT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("auth0.scope", "openid profile email")?
            .set_default("app.base_url", "http://localhost:8080")?
            .set_default("app.redirect_to", "/")?
            .set_default("graphql.endpoint", "http://localhost:4000/graphql")?
            .set_default("session.secure", false)?
            .set_default("session.inactivity_days", 7)
    }

    /// URL the identity provider redirects back to after login.
    pub fn callback_url(&self) -> String {
        format!("{}/api/callback", self.app.base_url.trim_end_matches('/'))
    }
}

/// Get or load the process-wide settings.
pub async fn get_settings() -> Result<&'static Settings, ConfigError> {
    SETTINGS
        .get_or_try_init(|| async {
            let settings = Settings::new()?;
            tracing::debug!(
                domain = %settings.auth0.domain,
                graphql = %settings.graphql.endpoint,
                "settings loaded"
            );
            Ok(settings)
        })
        .await
}
