use serde_json::{json, Value};

use super::{BackendClient, BackendError};
use crate::models::{DeleteImpact, RoleChange, User};

/// Admin user-management routes.
pub struct UserApi<'a> {
    client: &'a BackendClient,
}

impl<'a> UserApi<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, BackendError> {
        let users: Option<Vec<User>> = self.client.get("/admin/users/all").await?;
        Ok(users.unwrap_or_default())
    }

    pub async fn get(&self, id: u64) -> Result<User, BackendError> {
        self.client.get(&format!("/admin/user/{id}")).await
    }

    pub async fn delete_impact(&self, id: u64) -> Result<DeleteImpact, BackendError> {
        self.client
            .get(&format!("/admin/user/{id}/delete-impact"))
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<(), BackendError> {
        let _: Value = self.client.delete(&format!("/admin/user/{id}")).await?;
        Ok(())
    }

    pub async fn promote(&self, id: u64) -> Result<RoleChange, BackendError> {
        self.client
            .patch(&format!("/admin/user/{id}/promote"), &json!({}))
            .await
    }

    pub async fn demote(&self, id: u64) -> Result<RoleChange, BackendError> {
        self.client
            .patch(&format!("/admin/user/{id}/demote"), &json!({}))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json(id: u64, name: &str, is_admin: bool) -> Value {
        json!({
            "ID": id,
            "CreatedAt": "2024-01-10T08:00:00Z",
            "email": format!("{name}@example.com"),
            "display_name": name,
            "is_admin": is_admin
        })
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/admin/users/all")
            .match_header("authorization", "Bearer admin-token")
            .with_status(200)
            .with_body(json!([user_json(1, "marie", true), user_json(2, "luc", false)]).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/admin/user/2")
            .with_status(200)
            .with_body(user_json(2, "luc", false).to_string())
            .create_async()
            .await;

        let client = BackendClient::new(server.url()).with_token("admin-token");
        let users = UserApi::new(&client);

        let all = users.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].is_admin);

        assert_eq!(users.get(2).await.unwrap().label(), "luc");
    }

    #[tokio::test]
    async fn test_role_changes_send_empty_object() {
        let mut server = mockito::Server::new_async().await;
        let promote = server
            .mock("PATCH", "/admin/user/2/promote")
            .match_body(mockito::Matcher::Json(json!({})))
            .with_status(200)
            .with_body(
                json!({"message": "User promoted to admin successfully",
                       "user": {"id": 2, "display_name": "luc", "email": "luc@example.com", "is_admin": true}})
                .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("PATCH", "/admin/user/1/demote")
            .with_status(400)
            .with_body(r#"{"error": "Cannot demote yourself"}"#)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let users = UserApi::new(&client);

        let change = users.promote(2).await.unwrap();
        assert!(change.user.is_admin);
        promote.assert_async().await;

        let err = users.demote(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot demote yourself");
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/admin/user/7/delete-impact")
            .with_status(200)
            .with_body(
                json!({"can_delete": false, "warnings": ["User is the last admin"],
                       "impact": {"ratings_count": 0, "users_affected": 0, "sharings_count": 0}})
                .to_string(),
            )
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/admin/user/7")
            .with_status(204)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let users = UserApi::new(&client);

        let impact = users.delete_impact(7).await.unwrap();
        assert!(!impact.can_delete);
        assert_eq!(impact.warnings, vec!["User is the last admin"]);

        users.delete(7).await.unwrap();
        delete.assert_async().await;
    }
}
