use chrono::{DateTime, Datelike, Months, Utc};
use serde::{Deserialize, Serialize};

/// Repeat cadence attached to a reminder when recurring is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    #[default]
    Daily,
    Weekly,
}

/// One renewal-history entry. Appended server-side on renewal; the client
/// only ever reads whether any exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Renewal {
    pub renewed_at: Option<DateTime<Utc>>,
    pub previous_expiry: Option<DateTime<Utc>>,
    pub new_expiry: Option<DateTime<Utc>>,
}

/// A tracked client/project subscription record, as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    #[serde(rename = "_id")]
    pub id: String,
    pub client_name: String,
    pub contact_person: String,
    pub mobile1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// Set at creation, locked thereafter; renewals never touch it
    pub activation_date: DateTime<Utc>,
    /// The single source of truth for lifecycle status
    pub expiry_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub recurring_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewals: Option<Vec<Renewal>>,
}

/// Badge severity for a status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// Display status derived from a reminder's dates and renewal history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    pub text: &'static str,
    pub severity: Severity,
}

impl Reminder {
    /// The stored expiry instant. Never recomputed from the activation
    /// date plus a duration; comparisons against now are the sole
    /// determinant of expiration.
    pub fn expiry_instant(&self) -> DateTime<Utc> {
        self.expiry_date
    }

    /// True iff this reminder has ever been renewed, independent of its
    /// current expiry status.
    pub fn has_been_renewed(&self) -> bool {
        self.renewals.as_ref().map_or(false, |r| !r.is_empty())
    }

    /// Coarse remaining-time display string: "Expired" once past expiry,
    /// whole calendar months while at least one remains, whole days below
    /// that (0 allowed).
    pub fn remaining_time(&self, now: DateTime<Utc>) -> String {
        let expiry = self.expiry_instant();
        if expiry < now {
            return "Expired".to_string();
        }

        let months = whole_months_between(now, expiry);
        if months >= 1 {
            return format!("{} month(s)", months);
        }

        let days = (expiry - now).num_days();
        format!("{} day(s)", days)
    }

    /// Status badge, evaluated in strict priority order: expiration
    /// dominates renewal history.
    pub fn status_label(&self, now: DateTime<Utc>) -> StatusLabel {
        if self.expiry_instant() < now {
            StatusLabel {
                text: "Expired",
                severity: Severity::Error,
            }
        } else if self.has_been_renewed() {
            StatusLabel {
                text: "Renewed",
                severity: Severity::Info,
            }
        } else {
            StatusLabel {
                text: "Active",
                severity: Severity::Success,
            }
        }
    }
}

/// Whole calendar months from `from` to `to`, floored on month boundaries
/// rather than 30-day buckets. Expects `from <= to`.
fn whole_months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    let span = (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    let mut months = span.max(0) as u32;

    // The raw year/month span can overshoot when the day-of-month (or time
    // of day) hasn't been reached yet; step down until it fits.
    while months > 0 {
        match from.checked_add_months(Months::new(months)) {
            Some(candidate) if candidate <= to => break,
            _ => months -= 1,
        }
    }
    months
}
