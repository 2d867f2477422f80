//! # Users
//!
//! - [`User`] is the full account record returned by the admin user endpoints.
//! - [`AdminUser`] is the subset kept in the session for the signed-in
//!   administrator and handed to the browser by `get_current_admin`.
//! - [`RoleChange`] is the reply to promote/demote.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "ID")]
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub google_id: String,
    #[serde(default)]
    pub discoverable: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, alias = "CreatedAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "UpdatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Best available name: display name, then full name, then email.
    pub fn label(&self) -> &str {
        first_non_empty(&[&self.display_name, &self.full_name, &self.email])
    }
}

/// The signed-in administrator, safe to send to the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: u64,
    pub email: String,
    pub display_name: String,
    pub full_name: String,
    pub avatar: String,
    pub is_admin: bool,
}

impl AdminUser {
    pub fn label(&self) -> &str {
        first_non_empty(&[&self.display_name, &self.full_name, &self.email])
    }
}

impl From<&User> for AdminUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            full_name: user.full_name.clone(),
            avatar: user.avatar.clone(),
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "ID")]
    pub id: u64,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleChange {
    pub message: String,
    pub user: UserSummary,
}

fn first_non_empty<'a>(candidates: &[&'a String]) -> &'a str {
    candidates
        .iter()
        .map(|s| s.as_str())
        .find(|s| !s.trim().is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_gorm_json() {
        let user: User = serde_json::from_value(json!({
            "ID": 5,
            "CreatedAt": "2024-01-10T08:00:00Z",
            "UpdatedAt": "2024-02-10T08:00:00Z",
            "DeletedAt": null,
            "google_id": "1098",
            "email": "marie@example.com",
            "full_name": "Marie Tremblay",
            "avatar": "https://lh3.googleusercontent.com/a/x",
            "display_name": "",
            "discoverable": true,
            "profile_completed": false,
            "is_admin": true,
            "last_login_at": "2024-02-10T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(user.id, 5);
        assert!(user.is_admin);
        assert!(user.discoverable);
        assert!(user.created_at.is_some());
        assert!(user.last_login_at.is_some());
        assert_eq!(user.label(), "Marie Tremblay");

        let admin = AdminUser::from(&user);
        assert_eq!(admin.id, 5);
        assert_eq!(admin.email, "marie@example.com");
        assert_eq!(admin.label(), "Marie Tremblay");
    }

    #[test]
    fn test_label_falls_back_to_email() {
        let user: User = serde_json::from_value(json!({"id": 1, "email": "a@b.c"})).unwrap();
        assert_eq!(user.label(), "a@b.c");
    }

    #[test]
    fn test_role_change() {
        let change: RoleChange = serde_json::from_value(json!({
            "message": "User promoted to admin successfully",
            "user": {"id": 9, "display_name": "jdoe", "email": "j@doe.com", "is_admin": true}
        }))
        .unwrap();
        assert_eq!(change.user.id, 9);
        assert!(change.user.is_admin);
    }
}
