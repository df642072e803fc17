use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::MOBILE_DIGITS;
use crate::error::ValidationError;
use crate::reminder::{RecurringInterval, Reminder};

/// Which submission path the modal is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
    Renew,
}

/// The action button that opened the modal for an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalAction {
    #[default]
    Edit,
    Renew,
}

/// An existing record handed to the modal, tagged with the action that
/// opened it
#[derive(Debug, Clone)]
pub struct ModalTarget {
    pub reminder: Reminder,
    pub action: ModalAction,
}

impl Mode {
    /// No record means create; a record defaults to edit unless the renew
    /// button tagged it.
    pub fn select(target: Option<&ModalTarget>) -> Mode {
        match target {
            None => Mode::Create,
            Some(t) => match t.action {
                ModalAction::Edit => Mode::Edit,
                ModalAction::Renew => Mode::Renew,
            },
        }
    }
}

/// Raw modal form state. Text inputs stay strings until validated; date
/// pickers yield instants or nothing.
#[derive(Debug, Clone, Default)]
pub struct ReminderForm {
    pub client_name: String,
    pub contact_person: String,
    pub mobile1: String,
    pub mobile2: String,
    pub email: String,
    pub project_name: String,
    pub domain_name: String,
    pub activation_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub amount: String,
    pub recurring_enabled: bool,
    pub recurring_interval: RecurringInterval,
    pub renewed_expiry_date: Option<DateTime<Utc>>,
}

impl ReminderForm {
    /// Prefill from an existing record for edit/renew mode. The new-expiry
    /// field always starts empty.
    pub fn prefill(existing: &Reminder) -> Self {
        Self {
            client_name: existing.client_name.clone(),
            contact_person: existing.contact_person.clone(),
            mobile1: existing.mobile1.clone(),
            mobile2: existing.mobile2.clone().unwrap_or_default(),
            email: existing.email.clone().unwrap_or_default(),
            project_name: existing.project_name.clone(),
            domain_name: existing.domain_name.clone().unwrap_or_default(),
            activation_date: Some(existing.activation_date),
            expiry_date: Some(existing.expiry_date),
            amount: existing.amount.map(|a| a.to_string()).unwrap_or_default(),
            recurring_enabled: existing.recurring_enabled,
            recurring_interval: existing.recurring_interval.unwrap_or_default(),
            renewed_expiry_date: None,
        }
    }
}

/// Create-mode request body. Optional keys are dropped entirely when the
/// form left them empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayload {
    pub client_name: String,
    pub contact_person: String,
    pub mobile1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile2: Option<String>,
    pub email: String,
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    pub activation_date: String,
    pub expiry_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub recurring_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,
}

/// Edit-mode request body. Dates are immutable post-creation and carry no
/// keys here at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPayload {
    pub client_name: String,
    pub contact_person: String,
    pub mobile1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile2: Option<String>,
    pub email: String,
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub recurring_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,
}

/// Renew-mode request body: exactly one field. The backend appends the
/// renewal-history entry itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewPayload {
    pub expiry_date: String,
}

/// Mode-tagged request body; serializes as the bare variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Create(CreatePayload),
    Edit(EditPayload),
    Renew(RenewPayload),
}

/// Validate the form for `mode` and shape the matching request body
pub fn build_payload(form: &ReminderForm, mode: Mode) -> Result<Payload, ValidationError> {
    match mode {
        Mode::Create => build_create_payload(form).map(Payload::Create),
        Mode::Edit => build_edit_payload(form).map(Payload::Edit),
        Mode::Renew => build_renew_payload(form).map(Payload::Renew),
    }
}

pub fn build_create_payload(form: &ReminderForm) -> Result<CreatePayload, ValidationError> {
    let fields = validate_common(form)?;
    let activation_date = require_date(form.activation_date, "activationDate")?;
    let expiry_date = require_date(form.expiry_date, "expiryDate")?;

    Ok(CreatePayload {
        client_name: fields.client_name,
        contact_person: fields.contact_person,
        mobile1: fields.mobile1,
        mobile2: fields.mobile2,
        email: fields.email,
        project_name: fields.project_name,
        domain_name: fields.domain_name,
        activation_date: iso_instant(activation_date),
        expiry_date: iso_instant(expiry_date),
        amount: fields.amount,
        recurring_enabled: form.recurring_enabled,
        recurring_interval: fields.recurring_interval,
    })
}

pub fn build_edit_payload(form: &ReminderForm) -> Result<EditPayload, ValidationError> {
    let fields = validate_common(form)?;

    Ok(EditPayload {
        client_name: fields.client_name,
        contact_person: fields.contact_person,
        mobile1: fields.mobile1,
        mobile2: fields.mobile2,
        email: fields.email,
        project_name: fields.project_name,
        domain_name: fields.domain_name,
        amount: fields.amount,
        recurring_enabled: form.recurring_enabled,
        recurring_interval: fields.recurring_interval,
    })
}

pub fn build_renew_payload(form: &ReminderForm) -> Result<RenewPayload, ValidationError> {
    let renewed = require_date(form.renewed_expiry_date, "renewedExpiryDate")?;
    Ok(RenewPayload {
        expiry_date: iso_instant(renewed),
    })
}

/// Fields shared by create and edit, validated once
struct CommonFields {
    client_name: String,
    contact_person: String,
    mobile1: String,
    mobile2: Option<String>,
    email: String,
    project_name: String,
    domain_name: Option<String>,
    amount: Option<f64>,
    recurring_interval: Option<RecurringInterval>,
}

fn validate_common(form: &ReminderForm) -> Result<CommonFields, ValidationError> {
    let client_name = require(&form.client_name, "clientName")?;
    let contact_person = require(&form.contact_person, "contactPerson")?;
    let mobile1 = require(&form.mobile1, "mobile1")?;
    check_mobile(&mobile1, "mobile1")?;
    let email = require(&form.email, "email")?;
    let project_name = require(&form.project_name, "projectName")?;

    let mobile2 = optional(&form.mobile2);
    if let Some(m) = &mobile2 {
        check_mobile(m, "mobile2")?;
    }

    Ok(CommonFields {
        client_name,
        contact_person,
        mobile1,
        mobile2,
        email,
        project_name,
        domain_name: optional(&form.domain_name),
        amount: parse_amount(&form.amount)?,
        recurring_interval: form
            .recurring_enabled
            .then_some(form.recurring_interval),
    })
}

fn require(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed.to_string())
    }
}

fn require_date(
    value: Option<DateTime<Utc>>,
    field: &'static str,
) -> Result<DateTime<Utc>, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

fn check_mobile(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.len() == MOBILE_DIGITS && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field,
            rule: "exactly 10 digits",
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_amount(value: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "amount",
            rule: "a number",
        })
}

/// ISO-8601 instant with millisecond precision and a Z suffix, matching
/// what the backend stores
fn iso_instant(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_form() -> ReminderForm {
        ReminderForm {
            client_name: "Acme Corp".to_string(),
            contact_person: "Jane".to_string(),
            mobile1: "9876543210".to_string(),
            mobile2: String::new(),
            email: "jane@acme.test".to_string(),
            project_name: "Website".to_string(),
            domain_name: "acme.test".to_string(),
            activation_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            expiry_date: Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()),
            amount: "1500".to_string(),
            recurring_enabled: false,
            recurring_interval: RecurringInterval::Daily,
            renewed_expiry_date: None,
        }
    }

    #[test]
    fn test_create_payload_happy_path() {
        let payload = build_create_payload(&filled_form()).unwrap();
        assert_eq!(payload.client_name, "Acme Corp");
        assert_eq!(payload.activation_date, "2024-01-01T00:00:00.000Z");
        assert_eq!(payload.expiry_date, "2024-12-31T00:00:00.000Z");
        assert_eq!(payload.amount, Some(1500.0));
        assert!(payload.mobile2.is_none());
        assert!(payload.recurring_interval.is_none());
    }

    #[test]
    fn test_create_rejects_short_mobile() {
        let mut form = filled_form();
        form.mobile1 = "12345".to_string();
        let err = build_create_payload(&form).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "mobile1",
                rule: "exactly 10 digits",
            }
        );
    }

    #[test]
    fn test_create_rejects_non_numeric_mobile2() {
        let mut form = filled_form();
        form.mobile2 = "98765x3210".to_string();
        let err = build_create_payload(&form).unwrap_err();
        assert_eq!(err.field(), "mobile2");
    }

    #[test]
    fn test_create_requires_email() {
        let mut form = filled_form();
        form.email = "  ".to_string();
        let err = build_create_payload(&form).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "email" });
    }

    #[test]
    fn test_create_requires_dates() {
        let mut form = filled_form();
        form.expiry_date = None;
        let err = build_create_payload(&form).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "expiryDate" });
    }

    #[test]
    fn test_create_rejects_bad_amount() {
        let mut form = filled_form();
        form.amount = "lots".to_string();
        let err = build_create_payload(&form).unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn test_create_includes_interval_only_when_recurring() {
        let mut form = filled_form();
        form.recurring_enabled = true;
        form.recurring_interval = RecurringInterval::Weekly;
        let payload = build_create_payload(&form).unwrap();
        assert_eq!(payload.recurring_interval, Some(RecurringInterval::Weekly));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["recurringEnabled"], true);
        assert_eq!(json["recurringInterval"], "weekly");
    }

    #[test]
    fn test_create_drops_empty_optionals_from_json() {
        let mut form = filled_form();
        form.domain_name = String::new();
        form.amount = String::new();
        let json = serde_json::to_value(build_create_payload(&form).unwrap()).unwrap();
        let keys = json.as_object().unwrap();
        assert!(!keys.contains_key("mobile2"));
        assert!(!keys.contains_key("domainName"));
        assert!(!keys.contains_key("amount"));
        assert!(!keys.contains_key("recurringInterval"));
    }

    #[test]
    fn test_edit_payload_never_carries_dates() {
        let json = serde_json::to_value(build_edit_payload(&filled_form()).unwrap()).unwrap();
        let keys = json.as_object().unwrap();
        assert!(!keys.contains_key("activationDate"));
        assert!(!keys.contains_key("expiryDate"));
        assert!(keys.contains_key("clientName"));
    }

    #[test]
    fn test_edit_applies_same_validation() {
        let mut form = filled_form();
        form.mobile1 = "12345".to_string();
        assert!(build_edit_payload(&form).is_err());
    }

    #[test]
    fn test_renew_payload_is_single_key() {
        let mut form = filled_form();
        form.renewed_expiry_date = Some(Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap());
        let payload = build_renew_payload(&form).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        let keys = json.as_object().unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(json["expiryDate"], "2025-06-30T12:00:00.000Z");
    }

    #[test]
    fn test_renew_requires_new_expiry() {
        let err = build_renew_payload(&filled_form()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "renewedExpiryDate",
            }
        );
    }

    #[test]
    fn test_renew_ignores_other_missing_fields() {
        let mut form = ReminderForm::default();
        form.renewed_expiry_date = Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert!(build_renew_payload(&form).is_ok());
    }

    #[test]
    fn test_mode_selection_from_modal_target() {
        assert_eq!(Mode::select(None), Mode::Create);

        let reminder: Reminder = serde_json::from_value(serde_json::json!({
            "_id": "65a1",
            "clientName": "Acme Corp",
            "contactPerson": "Jane",
            "mobile1": "9876543210",
            "projectName": "Website",
            "activationDate": "2024-01-01T00:00:00Z",
            "expiryDate": "2024-12-31T00:00:00Z"
        }))
        .unwrap();

        let edit = ModalTarget {
            reminder: reminder.clone(),
            action: ModalAction::default(),
        };
        assert_eq!(Mode::select(Some(&edit)), Mode::Edit);

        let renew = ModalTarget {
            reminder,
            action: ModalAction::Renew,
        };
        assert_eq!(Mode::select(Some(&renew)), Mode::Renew);
    }

    #[test]
    fn test_build_payload_dispatches_by_mode() {
        let mut form = filled_form();
        form.renewed_expiry_date = Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

        assert!(matches!(
            build_payload(&form, Mode::Create),
            Ok(Payload::Create(_))
        ));
        assert!(matches!(
            build_payload(&form, Mode::Edit),
            Ok(Payload::Edit(_))
        ));
        assert!(matches!(
            build_payload(&form, Mode::Renew),
            Ok(Payload::Renew(_))
        ));
    }

    #[test]
    fn test_prefill_copies_record_and_clears_renewal_date() {
        let reminder: Reminder = serde_json::from_value(serde_json::json!({
            "_id": "65a1",
            "clientName": "Acme Corp",
            "contactPerson": "Jane",
            "mobile1": "9876543210",
            "mobile2": "9123456789",
            "projectName": "Website",
            "activationDate": "2024-01-01T00:00:00Z",
            "expiryDate": "2024-12-31T00:00:00Z",
            "amount": 1500.0,
            "recurringEnabled": true,
            "recurringInterval": "weekly"
        }))
        .unwrap();

        let form = ReminderForm::prefill(&reminder);
        assert_eq!(form.client_name, "Acme Corp");
        assert_eq!(form.mobile2, "9123456789");
        assert_eq!(form.amount, "1500");
        assert_eq!(form.recurring_interval, RecurringInterval::Weekly);
        assert!(form.renewed_expiry_date.is_none());
        assert_eq!(form.activation_date, Some(reminder.activation_date));
    }
}
