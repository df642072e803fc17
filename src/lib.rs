//! Client core for a subscription renewal reminder dashboard.
//!
//! Pure lifecycle computation and payload shaping for reminder records,
//! plus the REST boundary to the backend that owns them.

pub mod api;
pub mod config;
pub mod error;
pub mod payload;
pub mod reminder;
pub mod session;

pub use api::{ApiClient, NewUser, ReminderPage};
pub use config::Config;
pub use error::{AppError, AppResult, ValidationError};
pub use payload::{
    build_create_payload, build_edit_payload, build_payload, build_renew_payload, ModalAction,
    ModalTarget, Mode, Payload, ReminderForm,
};
pub use reminder::{RecurringInterval, Reminder, Renewal, Severity, StatusLabel};
pub use session::{Session, User};
