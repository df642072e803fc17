use super::ApiClient;
use crate::error::AppResult;
use crate::session::User;
use serde::Serialize;

/// Request body for creating a dashboard account. Password is optional so
/// Google-only accounts can be provisioned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// Admin user management is opaque CRUD; no derived logic lives here.
impl ApiClient {
    pub fn list_users(&self) -> AppResult<Vec<User>> {
        self.get_json("/admin/users", "Failed to load users")
    }

    pub fn create_user(&self, user: &NewUser) -> AppResult<User> {
        self.send_json("POST", "/admin/users", user, "Failed to create user")
    }

    /// Enable or disable an account
    pub fn set_user_enabled(&self, id: &str, enabled: bool) -> AppResult<()> {
        let action = if enabled { "enable" } else { "disable" };
        self.send_empty(
            "PUT",
            &format!("/admin/users/{}/{}", id, action),
            "Failed to update user",
        )
    }

    /// Enable or disable Google sign-in for an account
    pub fn set_google_login(&self, id: &str, enabled: bool) -> AppResult<()> {
        let action = if enabled { "enable" } else { "disable" };
        self.send_empty(
            "PUT",
            &format!("/admin/users/{}/google/{}", id, action),
            "Failed to update Google sign-in",
        )
    }
}
