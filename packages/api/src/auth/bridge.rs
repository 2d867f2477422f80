//! Exchange Google's tokens for a backend session.

use serde::Deserialize;

use super::google::GoogleTokens;
use super::session::AdminSession;
use super::AuthErrorKind;
use crate::backend::{BackendClient, BackendError};
use crate::models::{AdminUser, User};

#[derive(Debug, Deserialize)]
struct SignInResponse {
    token: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct AdminCheck {
    is_admin: bool,
}

/// Signs an administrator in to the backend.
pub struct AuthBridge {
    client: BackendClient,
}

impl AuthBridge {
    pub fn new(backend_url: &str) -> Self {
        Self {
            client: BackendClient::new(backend_url),
        }
    }

    /// Exchange Google tokens for a backend token, then require admin rights.
    pub async fn sign_in(&self, tokens: &GoogleTokens) -> Result<AdminSession, AuthErrorKind> {
        let signed_in: SignInResponse = self
            .client
            .post("/auth/google", tokens)
            .await
            .map_err(classify)?;

        let check: AdminCheck = self
            .client
            .clone()
            .with_token(signed_in.token.as_str())
            .get("/api/auth/check-admin")
            .await
            .map_err(classify)?;

        if !check.is_admin {
            tracing::warn!(user_id = signed_in.user.id, "sign-in refused: not an administrator");
            return Err(AuthErrorKind::AccessDenied);
        }

        Ok(AdminSession {
            user: AdminUser::from(&signed_in.user),
            backend_token: signed_in.token,
        })
    }
}

fn classify(err: BackendError) -> AuthErrorKind {
    tracing::warn!("backend sign-in failed: {}", err);
    match err {
        BackendError::Unreachable(_) => AuthErrorKind::ServiceUnavailable,
        err if err.is_rejection() => AuthErrorKind::AccessDenied,
        _ => AuthErrorKind::AuthenticationFailed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn tokens() -> GoogleTokens {
        GoogleTokens {
            id_token: "google-id-token".into(),
            access_token: "google-access-token".into(),
        }
    }

    async fn mock_sign_in(server: &mut mockito::Server, is_admin: bool) {
        server
            .mock("POST", "/auth/google")
            .match_body(Matcher::Json(json!({
                "id_token": "google-id-token",
                "access_token": "google-access-token"
            })))
            .with_status(200)
            .with_body(
                json!({
                    "token": "backend-jwt",
                    "message": "Login successful",
                    "user": {"ID": 3, "email": "marie@example.com", "full_name": "Marie Tremblay",
                             "display_name": "marie", "is_admin": is_admin}
                })
                .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("GET", "/api/auth/check-admin")
            .match_header("authorization", "Bearer backend-jwt")
            .with_status(200)
            .with_body(json!({"is_admin": is_admin}).to_string())
            .create_async()
            .await;
    }

    #[tokio::test]
    async fn test_admin_signs_in() {
        let mut server = mockito::Server::new_async().await;
        mock_sign_in(&mut server, true).await;

        let session = AuthBridge::new(&server.url()).sign_in(&tokens()).await.unwrap();
        assert_eq!(session.backend_token, "backend-jwt");
        assert_eq!(session.user.id, 3);
        assert_eq!(session.user.label(), "marie");
    }

    #[tokio::test]
    async fn test_non_admin_is_denied() {
        let mut server = mockito::Server::new_async().await;
        mock_sign_in(&mut server, false).await;

        let err = AuthBridge::new(&server.url()).sign_in(&tokens()).await.unwrap_err();
        assert_eq!(err, AuthErrorKind::AccessDenied);
    }

    #[tokio::test]
    async fn test_backend_status_mapping() {
        for (status, expected) in [
            (401, AuthErrorKind::AccessDenied),
            (403, AuthErrorKind::AccessDenied),
            (400, AuthErrorKind::AuthenticationFailed),
            (500, AuthErrorKind::AuthenticationFailed),
        ] {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("POST", "/auth/google")
                .with_status(status)
                .with_body(r#"{"error": "Invalid Google token"}"#)
                .create_async()
                .await;

            let err = AuthBridge::new(&server.url()).sign_in(&tokens()).await.unwrap_err();
            assert_eq!(err, expected, "status {status}");
        }
    }

    #[tokio::test]
    async fn test_admin_check_rejection() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/google")
            .with_status(200)
            .with_body(json!({"token": "backend-jwt", "user": {"ID": 3}}).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/api/auth/check-admin")
            .with_status(403)
            .with_body(r#"{"error": "Admin access required"}"#)
            .create_async()
            .await;

        let err = AuthBridge::new(&server.url()).sign_in(&tokens()).await.unwrap_err();
        assert_eq!(err, AuthErrorKind::AccessDenied);
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let err = AuthBridge::new("http://127.0.0.1:9")
            .sign_in(&tokens())
            .await
            .unwrap_err();
        assert_eq!(err, AuthErrorKind::ServiceUnavailable);
    }

    #[tokio::test]
    async fn test_malformed_reply() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/google")
            .with_status(200)
            .with_body(r#"{"message": "ok"}"#)
            .create_async()
            .await;

        let err = AuthBridge::new(&server.url()).sign_in(&tokens()).await.unwrap_err();
        assert_eq!(err, AuthErrorKind::AuthenticationFailed);
    }
}
