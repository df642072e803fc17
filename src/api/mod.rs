mod admin;
mod auth;
mod reminders;

pub use admin::NewUser;
pub use reminders::ReminderPage;

use crate::config::{Config, REQUEST_TIMEOUT_SECS};
use crate::error::{AppError, AppResult};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Shared HTTP agent with a bounded timeout for all backend calls
static AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
});

/// REST client for the reminder backend.
///
/// Holds the base URL and, once signed in, the session's bearer token.
/// Both are injected at construction; nothing is read from globals.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(config: &Config, token: impl Into<String>) -> Self {
        let mut client = Self::new(config);
        client.token = Some(token.into());
        client
    }

    /// Swap the bearer token after sign-in or sign-out
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let mut request = AGENT.request(method, &format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }
        request
    }

    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> AppResult<T> {
        let response = self
            .request("GET", path)
            .call()
            .map_err(|e| error_message(e, fallback))?;
        parse_body(response, fallback)
    }

    pub(crate) fn send_json<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: &impl Serialize,
        fallback: &str,
    ) -> AppResult<T> {
        let response = self
            .request(method, path)
            .send_json(body)
            .map_err(|e| error_message(e, fallback))?;
        parse_body(response, fallback)
    }

    /// Mutating call whose response body the caller does not consume
    pub(crate) fn send_empty(&self, method: &str, path: &str, fallback: &str) -> AppResult<()> {
        self.request(method, path)
            .call()
            .map_err(|e| error_message(e, fallback))?;
        Ok(())
    }
}

fn parse_body<T: DeserializeOwned>(response: ureq::Response, fallback: &str) -> AppResult<T> {
    response
        .into_json()
        .map_err(|e| AppError::request(format!("{}: unexpected response ({})", fallback, e)))
}

/// Pull the backend's human-readable `message` out of a failed response,
/// falling back to a generic label when the body has none.
fn error_message(err: ureq::Error, fallback: &str) -> AppError {
    match err {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_json::<serde_json::Value>()
                .ok()
                .and_then(|body| body["message"].as_str().map(String::from))
                .unwrap_or_else(|| format!("{} (status {})", fallback, code));
            AppError::request(message)
        }
        ureq::Error::Transport(e) => AppError::request(format!("{}: {}", fallback, e)),
    }
}
