use super::ApiClient;
use crate::error::{AppError, AppResult};
use crate::payload::{CreatePayload, EditPayload, Payload, RenewPayload};
use crate::reminder::Reminder;
use serde::Deserialize;

/// One dashboard page of reminders
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPage {
    pub data: Vec<Reminder>,
    pub page: u32,
    pub total_pages: u32,
}

impl ApiClient {
    /// Fetch one page of the reminder list. Callers re-fetch after every
    /// successful mutation instead of patching local state.
    pub fn list_reminders(&self, page: u32) -> AppResult<ReminderPage> {
        self.get_json(
            &format!("/reminders?page={}", page),
            "Failed to load reminders",
        )
    }

    pub fn create_reminder(&self, payload: &CreatePayload) -> AppResult<Reminder> {
        self.send_json("POST", "/reminders", payload, "Failed to save reminder")
    }

    pub fn update_reminder(&self, id: &str, payload: &EditPayload) -> AppResult<Reminder> {
        self.send_json(
            "PUT",
            &format!("/reminders/{}", id),
            payload,
            "Failed to update reminder",
        )
    }

    /// Send only the new expiry instant; the backend appends the
    /// renewal-history entry and leaves every other field untouched.
    pub fn renew_reminder(&self, id: &str, payload: &RenewPayload) -> AppResult<Reminder> {
        self.send_json(
            "PUT",
            &format!("/reminders/{}", id),
            payload,
            "Failed to renew reminder",
        )
    }

    /// Route a mode-tagged payload to the matching endpoint. Create needs
    /// no id; edit and renew do.
    pub fn submit(&self, id: Option<&str>, payload: &Payload) -> AppResult<Reminder> {
        match (payload, id) {
            (Payload::Create(p), _) => self.create_reminder(p),
            (Payload::Edit(p), Some(id)) => self.update_reminder(id, p),
            (Payload::Renew(p), Some(id)) => self.renew_reminder(id, p),
            (_, None) => Err(AppError::request("No reminder selected")),
        }
    }

    pub fn delete_reminder(&self, id: &str) -> AppResult<()> {
        self.send_empty(
            "DELETE",
            &format!("/reminders/{}", id),
            "Failed to delete reminder",
        )
    }
}
