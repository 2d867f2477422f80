//! What the server keeps in a signed-in administrator's session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AdminError, AdminResult};
use crate::models::AdminUser;

/// Key of the [`AdminSession`] entry.
pub const SESSION_ADMIN_KEY: &str = "admin";
/// Key of the [`PendingOAuth`] entry, present between login and callback.
pub const SESSION_OAUTH_KEY: &str = "oauth_pending";

/// Backend token plus the administrator it was issued to. The token never leaves
/// the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub backend_token: String,
    pub user: AdminUser,
}

/// CSRF state and PKCE verifier of an authorization request in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOAuth {
    pub csrf_state: String,
    pub pkce_verifier: String,
}

pub async fn current_admin(session: &Session) -> AdminResult<Option<AdminSession>> {
    Ok(session.get::<AdminSession>(SESSION_ADMIN_KEY).await?)
}

/// The signed-in administrator, or `NotAuthenticated`.
pub async fn require_admin(session: &Session) -> AdminResult<AdminSession> {
    current_admin(session)
        .await?
        .ok_or(AdminError::NotAuthenticated)
}

/// Unreadable sessions count as signed out.
pub async fn is_signed_in(session: &Session) -> bool {
    matches!(current_admin(session).await, Ok(Some(_)))
}

/// Start a fresh session id for the administrator and store them in it.
pub async fn store_admin(session: &Session, admin: &AdminSession) -> AdminResult<()> {
    session.cycle_id().await?;
    session.insert(SESSION_ADMIN_KEY, admin).await?;
    Ok(())
}

pub async fn remember_pending_login(session: &Session, pending: &PendingOAuth) -> AdminResult<()> {
    session.insert(SESSION_OAUTH_KEY, pending).await?;
    Ok(())
}

/// Remove and return the pending authorization request. Each one is usable once.
pub async fn take_pending_login(session: &Session) -> AdminResult<Option<PendingOAuth>> {
    Ok(session.remove::<PendingOAuth>(SESSION_OAUTH_KEY).await?)
}
