//! Appointment booking: service catalog entries, visitor requests, and the
//! booking form with its validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::schedule;
use crate::types::{DocId, Timestamp};

/// Collection name in the content store.
pub const COLLECTION: &str = "appointments";

/// Field used to order appointment requests for the admin inbox (newest
/// first).
pub const ORDER_FIELD: &str = "timestamp";

/// Initial status assigned to every new appointment request.
pub const STATUS_PENDING: &str = "pending";

// ---------------------------------------------------------------------------
// Service catalog
// ---------------------------------------------------------------------------

/// A bookable service. The catalog is static configuration (see
/// [`crate::seed::services`]), not a persisted collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentService {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

// ---------------------------------------------------------------------------
// Appointment requests
// ---------------------------------------------------------------------------

/// A persisted visitor booking. Immutable after creation except for
/// deletion by the admin.
///
/// `service` is a denormalized name snapshot, not a reference into the
/// catalog: renaming a service later must not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub id: DocId,
    pub client_name: String,
    pub client_whatsapp: String,
    pub service: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default)]
    pub status: String,
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// Booking form
// ---------------------------------------------------------------------------

/// The visitor-facing booking form buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub client_name: String,
    pub client_whatsapp: String,
}

/// A validated booking, ready to persist (id and timestamp are assigned by
/// the store at creation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub service: String,
    pub date: NaiveDate,
    pub time: String,
    pub client_name: String,
    pub client_whatsapp: String,
}

/// Validate a booking submission and extract the concrete values.
///
/// Required: a selected service, a date, a time from the fixed slot set, a
/// client name, and a WhatsApp contact. Returns the first failure without
/// any side effect.
pub fn validate_booking(
    service: Option<&AppointmentService>,
    form: &BookingForm,
) -> Result<BookingDraft, CoreError> {
    let service = service.ok_or_else(|| {
        CoreError::Validation("Select a service before initiating synchronization".into())
    })?;
    let date = form
        .date
        .ok_or_else(|| CoreError::Validation("Select an appointment date".into()))?;
    let time = form
        .time
        .clone()
        .ok_or_else(|| CoreError::Validation("Select a time slot".into()))?;
    schedule::validate_slot(&time)?;
    if form.client_name.trim().is_empty() {
        return Err(CoreError::Validation("Client name is required".into()));
    }
    if form.client_whatsapp.trim().is_empty() {
        return Err(CoreError::Validation(
            "Client WhatsApp contact is required".into(),
        ));
    }

    Ok(BookingDraft {
        service: service.name.clone(),
        date,
        time,
        client_name: form.client_name.trim().to_string(),
        client_whatsapp: form.client_whatsapp.trim().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn filled_form() -> BookingForm {
        BookingForm {
            date: NaiveDate::from_ymd_opt(2024, 6, 10),
            time: Some("15:00".into()),
            client_name: "Ada".into(),
            client_whatsapp: "+1555000111".into(),
        }
    }

    fn any_service() -> AppointmentService {
        seed::services().remove(0)
    }

    #[test]
    fn valid_booking_yields_draft_with_service_name_snapshot() {
        let service = any_service();
        let draft = validate_booking(Some(&service), &filled_form()).unwrap();
        assert_eq!(draft.service, service.name);
        assert_eq!(draft.time, "15:00");
        assert_eq!(draft.client_name, "Ada");
    }

    #[test]
    fn missing_service_is_rejected() {
        assert!(validate_booking(None, &filled_form()).is_err());
    }

    #[test]
    fn missing_date_is_rejected() {
        let mut form = filled_form();
        form.date = None;
        assert!(validate_booking(Some(&any_service()), &form).is_err());
    }

    #[test]
    fn missing_time_is_rejected() {
        let mut form = filled_form();
        form.time = None;
        assert!(validate_booking(Some(&any_service()), &form).is_err());
    }

    #[test]
    fn off_grid_time_is_rejected() {
        let mut form = filled_form();
        form.time = Some("15:31".into());
        assert!(validate_booking(Some(&any_service()), &form).is_err());
    }

    #[test]
    fn blank_client_fields_are_rejected() {
        let mut form = filled_form();
        form.client_name = "  ".into();
        assert!(validate_booking(Some(&any_service()), &form).is_err());

        let mut form = filled_form();
        form.client_whatsapp = String::new();
        assert!(validate_booking(Some(&any_service()), &form).is_err());
    }

    #[test]
    fn draft_trims_client_fields() {
        let mut form = filled_form();
        form.client_name = "  Ada  ".into();
        let draft = validate_booking(Some(&any_service()), &form).unwrap();
        assert_eq!(draft.client_name, "Ada");
    }

    #[test]
    fn request_round_trips_with_camel_case_keys() {
        let request = AppointmentRequest {
            id: "a1".into(),
            client_name: "Ada".into(),
            client_whatsapp: "+1555000111".into(),
            service: "DIGITAL STRATEGY AUDIT".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            time: "15:00".into(),
            status: STATUS_PENDING.into(),
            timestamp: chrono::Utc::now(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("clientName").is_some());
        assert!(value.get("clientWhatsapp").is_some());
        let back: AppointmentRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back, request);
    }
}
