use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::BackendError;

/// JSON-over-HTTP client bound to one backend base URL and, optionally, a bearer
/// token. Cheap to clone.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, BackendError> {
        tracing::debug!(%method, path, "backend request");

        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(BackendError::Unreachable)?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        // Empty bodies (e.g. 204 on delete) decode as JSON null
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

/// Build the error for a non-success response, preferring the backend's own
/// `error` or `message` field over the bare status reason.
async fn status_error(status: StatusCode, response: Response) -> BackendError {
    let body = response.json::<Value>().await.ok();
    let message = body
        .as_ref()
        .and_then(|body| {
            ["error", "message"]
                .iter()
                .find_map(|key| body.get(key).and_then(Value::as_str))
        })
        .map(str::to_string)
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("{} {reason}", status.as_u16()),
            None => format!("HTTP {}", status.as_u16()),
        });

    BackendError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_bearer_token_and_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/admin/user/3/promote")
            .match_header("authorization", "Bearer backend-token")
            .match_body(mockito::Matcher::Json(json!({})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = BackendClient::new(server.url()).with_token("backend-token");
        let reply: Value = client.patch("/admin/user/3/promote", &json!({})).await.unwrap();

        assert_eq!(reply, json!({"ok": true}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_message_from_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/cheese/99")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Cheese not found"}"#)
            .create_async()
            .await;
        server
            .mock("DELETE", "/admin/gin/1")
            .with_status(409)
            .with_body(r#"{"message": "Gin is still referenced"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/boom")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = BackendClient::new(server.url());

        let err = client.get::<Value>("/api/cheese/99").await.unwrap_err();
        assert!(matches!(
            &err,
            BackendError::Status { status: 404, message } if message == "Cheese not found"
        ));

        let err = client.delete::<Value>("/admin/gin/1").await.unwrap_err();
        assert_eq!(err.to_string(), "Gin is still referenced");

        let err = client.get::<Value>("/boom").await.unwrap_err();
        assert_eq!(err.to_string(), "500 Internal Server Error");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_empty_body_and_bad_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/admin/wine/4")
            .with_status(204)
            .create_async()
            .await;
        server
            .mock("GET", "/api/wine/all")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let client = BackendClient::new(format!("{}/", server.url()));
        client.delete::<()>("/admin/wine/4").await.unwrap();

        let err = client.get::<Vec<Value>>("/api/wine/all").await.unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable() {
        // Port 9 (discard) on localhost is not expected to accept connections
        let client = BackendClient::new("http://127.0.0.1:9");
        let err = client.get::<Value>("/api/user/me").await.unwrap_err();
        assert!(matches!(err, BackendError::Unreachable(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_url_joining() {
        let client = BackendClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/gin/all"), "http://localhost:8080/api/gin/all");
        assert_eq!(client.url("auth/google"), "http://localhost:8080/auth/google");
    }
}
