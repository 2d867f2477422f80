use dioxus::prelude::*;

use ui::{AuthProvider, QueryCacheProvider};
use views::{
    AdminLayout, Dashboard, ItemDelete, ItemList, ItemSeed, ItemView, Login, NotFound, UserDelete,
    UserList, UserView,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login?:error")]
    Login { error: String },
    #[layout(AdminLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        UserList {},
        #[route("/users/:id")]
        UserView { id: u64 },
        #[route("/users/:id/delete")]
        UserDelete { id: u64 },
        #[route("/:item_type")]
        ItemList { item_type: String },
        #[route("/:item_type/seed")]
        ItemSeed { item_type: String },
        #[route("/:item_type/:id")]
        ItemView { item_type: String, id: u64 },
        #[route("/:item_type/:id/delete")]
        ItemDelete { item_type: String, id: u64 },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Failed to start the tokio runtime: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(server::launch()) {
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
mod server {
    use api::auth::{complete_google_sign_in, is_signed_in, route_access, CallbackParams, RouteAccess};
    use api::settings::settings;
    use axum::extract::{Query, Request};
    use axum::middleware::{self, Next};
    use axum::response::{IntoResponse, Redirect, Response};
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower::ServiceBuilder;
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    use super::App;

    pub fn init_tracing() {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    pub async fn launch() -> Result<(), Box<dyn std::error::Error>> {
        let settings = settings()?;
        tracing::info!(backend = %settings.backend.url, "Settings loaded");
        if settings.google_credentials().is_none() {
            tracing::warn!("GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET not set, sign-in will fail");
        }

        let idle = Duration::hours(settings.session.max_idle_hours);
        let session_layer = SessionManagerLayer::new(MemoryStore::default())
            .with_secure(settings.session.secure_cookies)
            .with_same_site(SameSite::Lax)
            .with_expiry(Expiry::OnInactivity(idle));

        let router = axum::Router::new()
            .route("/auth/google/callback", get(google_callback))
            .serve_dioxus_application(ServeConfig::new(), App)
            .layer(
                ServiceBuilder::new()
                    .layer(session_layer)
                    .layer(middleware::from_fn(guard_pages)),
            );

        let addr = dioxus::cli_config::fullstack_address_or_localhost();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, router.into_make_service()).await?;
        Ok(())
    }

    /// Send signed-out visitors to the login page, and signed-in ones away from it.
    async fn guard_pages(session: Session, request: Request, next: Next) -> Response {
        let path = request.uri().path().to_owned();
        let signed_in = is_signed_in(&session).await;
        match route_access(&path, signed_in) {
            RouteAccess::Allow => next.run(request).await,
            RouteAccess::Redirect(to) => {
                tracing::debug!(%path, to, "redirecting");
                Redirect::to(to).into_response()
            }
        }
    }

    async fn google_callback(Query(params): Query<CallbackParams>, session: Session) -> Redirect {
        match complete_google_sign_in(&session, params).await {
            Ok(_) => Redirect::to(api::auth::HOME_PATH),
            Err(kind) => Redirect::to(&kind.login_redirect()),
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "A la carte Admin" }

        AuthProvider {
            QueryCacheProvider {
                Router::<Route> {}
            }
        }
    }
}
