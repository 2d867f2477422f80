//! Server settings.
//!
//! Loaded once per process with the `config` crate: built-in defaults, then an
//! optional `admin.toml` next to the binary, then environment variables. Besides the
//! structured `ADMIN__SECTION__KEY` variables, the plain names used by the rest of
//! the deployment (`API_URL`, `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`,
//! `AUTH_REDIRECT_URI`) are honoured and take precedence.

use std::collections::HashMap;
use std::sync::OnceLock;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::AdminResult;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_REDIRECT_URL: &str = "http://localhost:8081/auth/google/callback";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Longest inactivity a session survives, thirty days.
pub const MAX_IDLE_HOURS: i64 = 24 * 30;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
pub struct Backend {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Google {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub token_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub secure_cookies: bool,
    pub max_idle_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub backend: Backend,
    pub google: Google,
    pub session: Session,
}

impl Settings {
    /// Read `.env`, `admin.toml` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars().collect())
    }

    /// Build settings from an explicit set of environment variables.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let plain = |name: &str| vars.get(name).filter(|v| !v.is_empty()).cloned();

        let config = Config::builder()
            .set_default("backend.url", DEFAULT_BACKEND_URL)?
            .set_default("google.client_id", "")?
            .set_default("google.client_secret", "")?
            .set_default("google.redirect_url", DEFAULT_REDIRECT_URL)?
            .set_default("google.token_url", DEFAULT_TOKEN_URL)?
            .set_default("session.secure_cookies", false)?
            .set_default("session.max_idle_hours", 24)?
            .add_source(
                File::with_name("admin")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("ADMIN")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("backend.url", plain("API_URL"))?
            .set_override_option("google.client_id", plain("GOOGLE_CLIENT_ID"))?
            .set_override_option("google.client_secret", plain("GOOGLE_CLIENT_SECRET"))?
            .set_override_option("google.redirect_url", plain("AUTH_REDIRECT_URI"))?
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;
        settings.backend.url = settings.backend.url.trim_end_matches('/').to_string();
        if !(1..=MAX_IDLE_HOURS).contains(&settings.session.max_idle_hours) {
            return Err(ConfigError::Message(format!(
                "session.max_idle_hours must be between 1 and {MAX_IDLE_HOURS}, got {}",
                settings.session.max_idle_hours
            )));
        }
        Ok(settings)
    }

    /// Both Google credentials, or `None` if either is missing.
    pub fn google_credentials(&self) -> Option<(&str, &str)> {
        let (id, secret) = (self.google.client_id.trim(), self.google.client_secret.trim());
        (!id.is_empty() && !secret.is_empty()).then_some((id, secret))
    }
}

/// Process-wide settings, loaded on first use.
pub fn settings() -> AdminResult<&'static Settings> {
    if let Some(settings) = SETTINGS.get() {
        return Ok(settings);
    }
    let loaded = Settings::load()?;
    Ok(SETTINGS.get_or_init(|| loaded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_vars(HashMap::new()).unwrap();
        assert_eq!(settings.backend.url, DEFAULT_BACKEND_URL);
        assert_eq!(settings.google.redirect_url, DEFAULT_REDIRECT_URL);
        assert!(!settings.session.secure_cookies);
        assert_eq!(settings.session.max_idle_hours, 24);
        assert_eq!(settings.google.token_url, DEFAULT_TOKEN_URL);
        assert!(settings.google_credentials().is_none());
    }

    #[test]
    fn test_plain_variables() {
        let settings = Settings::from_vars(vars(&[
            ("API_URL", "https://api.alacarte.test/"),
            ("GOOGLE_CLIENT_ID", "client-id"),
            ("GOOGLE_CLIENT_SECRET", "client-secret"),
            ("AUTH_REDIRECT_URI", "https://admin.alacarte.test/auth/google/callback"),
        ]))
        .unwrap();
        assert_eq!(settings.backend.url, "https://api.alacarte.test");
        assert_eq!(
            settings.google_credentials(),
            Some(("client-id", "client-secret"))
        );
        assert_eq!(
            settings.google.redirect_url,
            "https://admin.alacarte.test/auth/google/callback"
        );
    }

    #[test]
    fn test_structured_variables() {
        let settings = Settings::from_vars(vars(&[
            ("ADMIN__BACKEND__URL", "http://backend:8080"),
            ("ADMIN__SESSION__SECURE_COOKIES", "true"),
            ("ADMIN__SESSION__MAX_IDLE_HOURS", "8"),
        ]))
        .unwrap();
        assert_eq!(settings.backend.url, "http://backend:8080");
        assert!(settings.session.secure_cookies);
        assert_eq!(settings.session.max_idle_hours, 8);
    }

    #[test]
    fn test_plain_name_wins() {
        let settings = Settings::from_vars(vars(&[
            ("ADMIN__BACKEND__URL", "http://backend:8080"),
            ("API_URL", "http://api:9000"),
        ]))
        .unwrap();
        assert_eq!(settings.backend.url, "http://api:9000");
    }

    #[test]
    fn test_one_credential_is_not_enough() {
        let settings = Settings::from_vars(vars(&[("GOOGLE_CLIENT_ID", "client-id")])).unwrap();
        assert!(settings.google_credentials().is_none());
    }

    #[test]
    fn test_idle_hours_bounds() {
        for hours in ["0", "-5", "720000000000"] {
            let err = Settings::from_vars(vars(&[("ADMIN__SESSION__MAX_IDLE_HOURS", hours)]))
                .unwrap_err();
            assert!(err.to_string().contains("max_idle_hours"), "{hours}: {err}");
        }
        let settings =
            Settings::from_vars(vars(&[("ADMIN__SESSION__MAX_IDLE_HOURS", "720")])).unwrap();
        assert_eq!(settings.session.max_idle_hours, MAX_IDLE_HOURS);
    }
}
