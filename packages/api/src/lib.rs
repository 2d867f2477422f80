//! # API crate: shared fullstack server functions for the A la carte admin dashboard
//!
//! The dashboard is a thin layer over the catalog backend. The browser only ever
//! calls the Dioxus server functions defined here; they read the administrator's
//! backend token from the server-side session and forward the request with
//! [`backend::BackendClient`].
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly `server` | Sign-in error kinds and route guard; Google OAuth, backend token exchange and session types on the server |
//! | [`backend`] | `server` | reqwest client for the backend, typed item and user routes |
//! | [`cache`] | - | Request-result cache keyed by [`QueryKey`] |
//! | [`models`] | - | Items, users, delete impact, bulk-import payloads |
//! | [`registry`] | - | Per-item-type configuration: fields, table columns, backend routes |
//! | [`settings`] | `server` | `config`-crate settings (backend URL, Google credentials, session) |
//! | [`validation`] | - | Shallow client-side checks before a request is sent |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_admin`, `get_login_url`, `logout`
//! - **Items**: `list_items`, `get_item`, `get_item_delete_impact`, `delete_item`,
//!   `seed_items`, `validate_items`
//! - **Users**: `list_users`, `get_user`, `get_user_delete_impact`, `delete_user`,
//!   `promote_user`, `demote_user`
//!
//! Data functions fail with "Not authenticated" without an administrator session,
//! and reject unknown item types before any backend request is made.

use dioxus::prelude::*;

pub mod auth;
#[cfg(feature = "server")]
pub mod backend;
pub mod cache;
pub mod error;
pub mod models;
pub mod registry;
#[cfg(feature = "server")]
pub mod settings;
pub mod validation;

pub use cache::{QueryCache, QueryKey};
pub use error::{AdminError, AdminResult};
pub use models::{
    display_timestamp, AdminUser, AffectedUser, DeleteImpact, ImpactCounts, Item, RoleChange,
    SeedResult, SeedSource, User, UserSummary, ValidationResult,
};
pub use registry::{all_item_types, is_valid_item_type, item_type_config, ItemTypeConfig};

#[cfg(feature = "server")]
fn server_error(err: AdminError) -> ServerFnError {
    match &err {
        AdminError::Backend(e) => tracing::error!("Backend request failed: {}", e),
        AdminError::Config(e) => tracing::error!("Settings error: {}", e),
        AdminError::Session(e) => tracing::error!("Session error: {}", e),
        _ => {}
    }
    ServerFnError::new(err.to_string())
}

#[cfg(feature = "server")]
fn backend_error(err: backend::BackendError) -> ServerFnError {
    server_error(AdminError::Backend(err))
}

/// Backend client carrying the signed-in administrator's token.
#[cfg(feature = "server")]
async fn admin_client(session: &tower_sessions::Session) -> AdminResult<backend::BackendClient> {
    let admin = auth::require_admin(session).await?;
    let settings = settings::settings()?;
    Ok(backend::BackendClient::new(settings.backend.url.as_str()).with_token(admin.backend_token))
}

/// Shallow check of an upload before it is forwarded.
#[cfg(feature = "server")]
fn checked_source(source: SeedSource) -> AdminResult<SeedSource> {
    match source {
        SeedSource::Url(url) => Ok(SeedSource::Url(validation::validate_seed_url(&url)?.into())),
        SeedSource::Data(data) if data.is_object() => Ok(SeedSource::Data(data)),
        SeedSource::Data(_) => Err(AdminError::InvalidInput(
            "Upload must be a JSON object".to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// The signed-in administrator, if any.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_admin() -> Result<Option<AdminUser>, ServerFnError> {
    let admin = auth::current_admin(&session).await.map_err(server_error)?;
    Ok(admin.map(|admin| admin.user))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_admin() -> Result<Option<AdminUser>, ServerFnError> {
    Ok(None)
}

/// Google authorization URL. The CSRF state and PKCE verifier stay in the session
/// until `/auth/google/callback`.
#[cfg(feature = "server")]
#[get("/api/auth/login", session: tower_sessions::Session)]
pub async fn get_login_url() -> Result<String, ServerFnError> {
    let settings = settings::settings().map_err(server_error)?;
    let oauth = auth::GoogleOAuth::new(settings)
        .map_err(|kind| ServerFnError::new(kind.description()))?;
    let pending = oauth.generate_auth_url();

    auth::remember_pending_login(&session, &pending.to_session())
        .await
        .map_err(server_error)?;

    Ok(pending.url)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/login")]
pub async fn get_login_url() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out by discarding the whole session, backend token included.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| server_error(e.into()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// All items of a type, in the type's default sort order.
#[cfg(feature = "server")]
#[get("/api/items/:item_type", session: tower_sessions::Session)]
pub async fn list_items(item_type: String) -> Result<Vec<Item>, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    let api = backend::ItemApi::new(&client, &item_type).map_err(server_error)?;

    let mut items = api.list().await.map_err(backend_error)?;
    api.config().sort_items(&mut items);
    Ok(items)
}

#[cfg(not(feature = "server"))]
#[get("/api/items/:item_type")]
pub async fn list_items(item_type: String) -> Result<Vec<Item>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/items/:item_type/:id", session: tower_sessions::Session)]
pub async fn get_item(item_type: String, id: u64) -> Result<Item, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    let api = backend::ItemApi::new(&client, &item_type).map_err(server_error)?;
    api.get(id).await.map_err(backend_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/items/:item_type/:id")]
pub async fn get_item(item_type: String, id: u64) -> Result<Item, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/items/:item_type/:id/delete-impact", session: tower_sessions::Session)]
pub async fn get_item_delete_impact(
    item_type: String,
    id: u64,
) -> Result<DeleteImpact, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    let api = backend::ItemApi::new(&client, &item_type).map_err(server_error)?;
    api.delete_impact(id).await.map_err(backend_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/items/:item_type/:id/delete-impact")]
pub async fn get_item_delete_impact(
    item_type: String,
    id: u64,
) -> Result<DeleteImpact, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/items/:item_type/:id/delete", session: tower_sessions::Session)]
pub async fn delete_item(item_type: String, id: u64) -> Result<(), ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    let api = backend::ItemApi::new(&client, &item_type).map_err(server_error)?;
    api.delete(id).await.map_err(backend_error)?;

    tracing::info!(item_type = %item_type, id, "item deleted");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/items/:item_type/:id/delete")]
pub async fn delete_item(item_type: String, id: u64) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Bulk import from a URL or an uploaded document.
#[cfg(feature = "server")]
#[post("/api/items/:item_type/seed", session: tower_sessions::Session)]
pub async fn seed_items(item_type: String, source: SeedSource) -> Result<SeedResult, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    let api = backend::ItemApi::new(&client, &item_type).map_err(server_error)?;
    let source = checked_source(source).map_err(server_error)?;

    let result = api.seed(&source).await.map_err(backend_error)?;
    tracing::info!(
        item_type = %item_type,
        added = result.added,
        skipped = result.skipped,
        errors = result.errors.len(),
        "bulk import finished"
    );
    Ok(result)
}

#[cfg(not(feature = "server"))]
#[post("/api/items/:item_type/seed")]
pub async fn seed_items(item_type: String, source: SeedSource) -> Result<SeedResult, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Dry run of `seed_items`.
#[cfg(feature = "server")]
#[post("/api/items/:item_type/validate", session: tower_sessions::Session)]
pub async fn validate_items(
    item_type: String,
    source: SeedSource,
) -> Result<ValidationResult, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    let api = backend::ItemApi::new(&client, &item_type).map_err(server_error)?;
    let source = checked_source(source).map_err(server_error)?;
    api.validate(&source).await.map_err(backend_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/items/:item_type/validate")]
pub async fn validate_items(
    item_type: String,
    source: SeedSource,
) -> Result<ValidationResult, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[cfg(feature = "server")]
#[get("/api/users", session: tower_sessions::Session)]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    backend::UserApi::new(&client)
        .list()
        .await
        .map_err(backend_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/users/:id", session: tower_sessions::Session)]
pub async fn get_user(id: u64) -> Result<User, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    backend::UserApi::new(&client)
        .get(id)
        .await
        .map_err(backend_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/users/:id")]
pub async fn get_user(id: u64) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/users/:id/delete-impact", session: tower_sessions::Session)]
pub async fn get_user_delete_impact(id: u64) -> Result<DeleteImpact, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    backend::UserApi::new(&client)
        .delete_impact(id)
        .await
        .map_err(backend_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/users/:id/delete-impact")]
pub async fn get_user_delete_impact(id: u64) -> Result<DeleteImpact, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/users/:id/delete", session: tower_sessions::Session)]
pub async fn delete_user(id: u64) -> Result<(), ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    backend::UserApi::new(&client)
        .delete(id)
        .await
        .map_err(backend_error)?;

    tracing::info!(id, "user deleted");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/users/:id/delete")]
pub async fn delete_user(id: u64) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/users/:id/promote", session: tower_sessions::Session)]
pub async fn promote_user(id: u64) -> Result<RoleChange, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    let change = backend::UserApi::new(&client)
        .promote(id)
        .await
        .map_err(backend_error)?;

    tracing::info!(id, "user promoted to admin");
    Ok(change)
}

#[cfg(not(feature = "server"))]
#[post("/api/users/:id/promote")]
pub async fn promote_user(id: u64) -> Result<RoleChange, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/users/:id/demote", session: tower_sessions::Session)]
pub async fn demote_user(id: u64) -> Result<RoleChange, ServerFnError> {
    let client = admin_client(&session).await.map_err(server_error)?;
    let change = backend::UserApi::new(&client)
        .demote(id)
        .await
        .map_err(backend_error)?;

    tracing::info!(id, "user demoted");
    Ok(change)
}

#[cfg(not(feature = "server"))]
#[post("/api/users/:id/demote")]
pub async fn demote_user(id: u64) -> Result<RoleChange, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checked_source() {
        assert_eq!(
            checked_source(SeedSource::Url(" https://x.test/gins.json ".into())).unwrap(),
            SeedSource::Url("https://x.test/gins.json".into())
        );
        assert!(checked_source(SeedSource::Url("gins.json".into())).is_err());
        assert!(checked_source(SeedSource::Data(json!({"gins": []}))).is_ok());
        assert_eq!(
            checked_source(SeedSource::Data(json!([1])))
                .unwrap_err()
                .to_string(),
            "Upload must be a JSON object"
        );
    }
}
