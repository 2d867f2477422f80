//! Google OAuth client configuration, built from [`Settings`].

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use super::AuthErrorKind;
use crate::settings::Settings;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl OAuthConfig {
    /// Fails with `Configuration` when credentials are missing or a URL is invalid.
    pub fn google(settings: &Settings) -> Result<Self, AuthErrorKind> {
        let Some((client_id, client_secret)) = settings.google_credentials() else {
            tracing::error!("GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET not set");
            return Err(AuthErrorKind::Configuration);
        };

        let invalid = |e: oauth2::url::ParseError| {
            tracing::error!("Invalid OAuth URL: {}", e);
            AuthErrorKind::Configuration
        };

        Ok(Self {
            client_id: ClientId::new(client_id.to_string()),
            client_secret: ClientSecret::new(client_secret.to_string()),
            auth_url: AuthUrl::new(GOOGLE_AUTH_URL.to_string()).map_err(invalid)?,
            token_url: TokenUrl::new(settings.google.token_url.clone()).map_err(invalid)?,
            redirect_url: RedirectUrl::new(settings.google.redirect_url.clone()).map_err(invalid)?,
        })
    }
}
