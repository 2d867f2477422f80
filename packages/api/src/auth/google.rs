//! # Google OAuth 2.0
//!
//! Authorization Code flow with PKCE against Google's endpoints, asking for
//! `openid email profile` with `prompt=consent` and `access_type=offline`.
//!
//! 1. [`generate_auth_url`](GoogleOAuth::generate_auth_url) returns the URL to
//!    send the browser to, along with the CSRF state and PKCE verifier. The caller
//!    keeps those two in the session until the callback.
//! 2. [`exchange_code`](GoogleOAuth::exchange_code) trades the returned code (and the
//!    verifier) for Google's ID token and access token. Both are handed to the
//!    backend as-is; nothing here inspects them.

use oauth2::basic::{
    BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
    BasicTokenType,
};
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, ExtraTokenFields,
    PkceCodeChallenge, PkceCodeVerifier, Scope, StandardRevocableToken, StandardTokenResponse,
    TokenResponse,
};
use serde::{Deserialize, Serialize};

use super::config::OAuthConfig;
use super::session::PendingOAuth;
use super::AuthErrorKind;
use crate::settings::Settings;

/// The OpenID Connect `id_token` Google returns next to the access token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleIdTokenFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl ExtraTokenFields for GoogleIdTokenFields {}

type GoogleTokenResponse = StandardTokenResponse<GoogleIdTokenFields, BasicTokenType>;

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    BasicErrorResponse,
    GoogleTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// An authorization request ready to be sent to Google.
#[derive(Debug, Clone)]
pub struct PendingLogin {
    pub url: String,
    pub csrf_state: String,
    pub pkce_verifier: String,
}

impl PendingLogin {
    /// The part of the request that must survive until the callback.
    pub fn to_session(&self) -> PendingOAuth {
        PendingOAuth {
            csrf_state: self.csrf_state.clone(),
            pkce_verifier: self.pkce_verifier.clone(),
        }
    }
}

/// Google's tokens for the signed-in account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleTokens {
    pub id_token: String,
    pub access_token: String,
}

pub struct GoogleOAuth {
    config: OAuthConfig,
}

impl GoogleOAuth {
    pub fn new(settings: &Settings) -> Result<Self, AuthErrorKind> {
        Ok(Self {
            config: OAuthConfig::google(settings)?,
        })
    }

    fn create_client(&self) -> ConfiguredClient {
        oauth2::Client::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    pub fn generate_auth_url(&self) -> PendingLogin {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = self
            .create_client()
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_extra_param("prompt", "consent")
            .add_extra_param("access_type", "offline")
            .set_pkce_challenge(pkce_challenge)
            .url();

        PendingLogin {
            url: auth_url.to_string(),
            csrf_state: csrf_state.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        }
    }

    /// Any failure here means the round trip could not be verified.
    pub async fn exchange_code(
        &self,
        code: &str,
        pkce_verifier: &str,
    ) -> Result<GoogleTokens, AuthErrorKind> {
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                AuthErrorKind::Configuration
            })?;

        let token = self
            .create_client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier.to_string()))
            .request_async(&http_client)
            .await
            .map_err(|e| {
                tracing::warn!("Google token exchange failed: {}", e);
                AuthErrorKind::Verification
            })?;

        let Some(id_token) = token.extra_fields().id_token.clone() else {
            tracing::warn!("Google token response carried no id_token");
            return Err(AuthErrorKind::Verification);
        };

        Ok(GoogleTokens {
            id_token,
            access_token: token.access_token().secret().clone(),
        })
    }
}
