//! The `/auth/google/callback` pipeline.

use serde::Deserialize;
use tower_sessions::Session;

use super::bridge::AuthBridge;
use super::google::GoogleOAuth;
use super::session::{store_admin, take_pending_login};
use super::AuthErrorKind;
use crate::models::AdminUser;
use crate::settings::{self, Settings};

/// Query parameters Google appends to the redirect URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set instead of `code` when the user declined or Google refused.
    pub error: Option<String>,
}

/// Finish a Google sign-in with the process settings.
pub async fn complete_google_sign_in(
    session: &Session,
    params: CallbackParams,
) -> Result<AdminUser, AuthErrorKind> {
    let settings = settings::settings().map_err(|e| {
        tracing::error!("Failed to load settings: {}", e);
        AuthErrorKind::Configuration
    })?;
    finish_sign_in(session, params, settings).await
}

/// Finish a Google sign-in and store the administrator in `session`.
///
/// The pending request is consumed first, so a callback URL cannot be replayed
/// whatever the outcome.
async fn finish_sign_in(
    session: &Session,
    params: CallbackParams,
    settings: &Settings,
) -> Result<AdminUser, AuthErrorKind> {
    let pending = take_pending_login(session).await.map_err(|e| {
        tracing::error!("Failed to read session: {}", e);
        AuthErrorKind::AuthenticationFailed
    })?;

    if let Some(error) = params.error {
        tracing::warn!("Google sign-in refused: {}", error);
        return Err(AuthErrorKind::AccessDenied);
    }

    let (Some(code), Some(state)) = (params.code, params.state) else {
        tracing::warn!("Google callback missing code or state");
        return Err(AuthErrorKind::Verification);
    };
    let Some(pending) = pending.filter(|pending| pending.csrf_state == state) else {
        tracing::warn!("Google callback state does not match a pending login");
        return Err(AuthErrorKind::Verification);
    };

    let oauth = GoogleOAuth::new(settings)?;
    let tokens = oauth.exchange_code(&code, &pending.pkce_verifier).await?;

    let admin = AuthBridge::new(&settings.backend.url)
        .sign_in(&tokens)
        .await?;

    store_admin(session, &admin).await.map_err(|e| {
        tracing::error!("Failed to store session: {}", e);
        AuthErrorKind::AuthenticationFailed
    })?;

    tracing::info!(user_id = admin.user.id, "administrator signed in");
    Ok(admin.user)
}
