use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Home, ProductsIndex};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/vendors/products")]
    ProductsIndex {},
}

const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css";

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,api=debug,web=debug".into()),
            )
            .init();

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Failed to start runtime: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server stopped: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::Arc;

    use api::auth::{auth_routes, Auth0Provider, AuthRoutes};
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    let settings = api::settings::get_settings().await?;

    let provider = Arc::new(Auth0Provider::new(settings)?);
    let logout_return_to = format!("{}/", settings.app.base_url.trim_end_matches('/'));
    let auth = AuthRoutes::new(provider, settings.app.redirect_to.clone(), logout_return_to);

    // Sessions live in process memory; a restart signs everyone out.
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            settings.session.inactivity_days,
        )));

    let router = axum::Router::new()
        // Auth routes first, so the app's catch-all does not shadow them
        .merge(auth_routes(auth))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Storefront" }
        document::Link { rel: "stylesheet", href: BULMA_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
