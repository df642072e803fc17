use super::ApiClient;
use crate::error::AppResult;
use crate::session::Session;
use serde_json::json;

impl ApiClient {
    /// Password sign-in; returns the session payload issued by the backend
    pub fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        self.send_json(
            "POST",
            "/auth/login",
            &json!({ "email": email, "password": password }),
            "Login failed",
        )
    }

    /// Google sign-in with the credential string from the OAuth widget.
    /// Verification happens server-side; this just forwards it.
    pub fn login_with_google(&self, credential: &str) -> AppResult<Session> {
        self.send_json(
            "POST",
            "/auth/google",
            &json!({ "credential": credential }),
            "Google sign-in failed",
        )
    }
}
