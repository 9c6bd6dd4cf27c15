//! Submission flow steps.
//!
//! Each flow splits into a pure `begin` step (validate, transition to
//! Sending, build the payload) and a pure `complete` step (Success or
//! Failed), with the single store write between them performed by
//! [`crate::site::Site`]. The split keeps the tri-state machine testable
//! without a store.

use serde_json::{json, Value};

use nexus_core::booking::{self, BookingDraft};
use nexus_core::message::{self, ContactForm};
use nexus_core::view::{SubmitStatus, ViewState};
use nexus_core::CoreError;
use nexus_store::server_timestamp;

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// Validate the contact form and move the flow to Sending.
///
/// A validation failure returns without touching the submit status; no
/// write must follow.
pub fn begin_contact(view: &mut ViewState) -> Result<Value, CoreError> {
    message::validate_contact(&view.contact_form)?;
    view.contact_status = SubmitStatus::Sending;
    Ok(contact_payload(&view.contact_form))
}

/// Record the write outcome. Success clears the buffer so the flow restarts
/// pre-fill-free; failure keeps it for a manual retry.
pub fn complete_contact(view: &mut ViewState, ok: bool) {
    if ok {
        view.contact_status = SubmitStatus::Success;
        view.contact_form = ContactForm::default();
    } else {
        view.contact_status = SubmitStatus::Failed;
    }
}

fn contact_payload(form: &ContactForm) -> Value {
    json!({
        "name": form.name,
        "email": form.email,
        "message": form.message,
        "status": message::STATUS_UNREAD,
        "timestamp": server_timestamp(),
    })
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// Validate the booking form against the selected service and move the
/// flow to Sending.
pub fn begin_booking(view: &mut ViewState) -> Result<Value, CoreError> {
    let draft = booking::validate_booking(view.selected_service.as_ref(), &view.booking_form)?;
    view.booking_status = SubmitStatus::Sending;
    Ok(booking_payload(&draft))
}

/// Record the write outcome for the booking flow.
pub fn complete_booking(view: &mut ViewState, ok: bool) {
    if ok {
        view.booking_status = SubmitStatus::Success;
        view.booking_form = Default::default();
    } else {
        view.booking_status = SubmitStatus::Failed;
    }
}

fn booking_payload(draft: &BookingDraft) -> Value {
    json!({
        "clientName": draft.client_name,
        "clientWhatsapp": draft.client_whatsapp,
        "service": draft.service,
        "date": draft.date.to_string(),
        "time": draft.time,
        "status": booking::STATUS_PENDING,
        "timestamp": server_timestamp(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nexus_core::seed;

    fn filled_contact_view() -> ViewState {
        let mut view = ViewState::new();
        view.contact_form = ContactForm {
            name: "Ada".into(),
            email: "ada@agency.test".into(),
            message: "Mission parameters attached.".into(),
        };
        view
    }

    fn filled_booking_view() -> ViewState {
        let mut view = ViewState::new();
        view.select_service(seed::services().remove(0));
        view.booking_form.date = NaiveDate::from_ymd_opt(2024, 6, 10);
        view.booking_form.time = Some("15:00".into());
        view.booking_form.client_name = "Ada".into();
        view.booking_form.client_whatsapp = "+1555000111".into();
        view
    }

    #[test]
    fn begin_contact_rejects_invalid_forms_without_status_change() {
        let mut view = ViewState::new();
        assert!(begin_contact(&mut view).is_err());
        assert_eq!(view.contact_status, SubmitStatus::Idle);
    }

    #[test]
    fn begin_contact_builds_payload_and_enters_sending() {
        let mut view = filled_contact_view();
        let payload = begin_contact(&mut view).unwrap();
        assert_eq!(view.contact_status, SubmitStatus::Sending);
        assert_eq!(payload["name"], "Ada");
        assert_eq!(payload["status"], message::STATUS_UNREAD);
        assert_eq!(payload["timestamp"], server_timestamp());
    }

    #[test]
    fn complete_contact_success_clears_the_buffer() {
        let mut view = filled_contact_view();
        begin_contact(&mut view).unwrap();
        complete_contact(&mut view, true);
        assert_eq!(view.contact_status, SubmitStatus::Success);
        assert_eq!(view.contact_form, ContactForm::default());
    }

    #[test]
    fn complete_contact_failure_keeps_the_buffer() {
        let mut view = filled_contact_view();
        begin_contact(&mut view).unwrap();
        complete_contact(&mut view, false);
        assert_eq!(view.contact_status, SubmitStatus::Failed);
        assert_eq!(view.contact_form.name, "Ada");
    }

    #[test]
    fn begin_booking_requires_a_service_selection() {
        let mut view = filled_booking_view();
        view.clear_service();
        assert!(begin_booking(&mut view).is_err());
        assert_eq!(view.booking_status, SubmitStatus::Idle);
    }

    #[test]
    fn begin_booking_snapshots_the_service_name() {
        let mut view = filled_booking_view();
        let payload = begin_booking(&mut view).unwrap();
        assert_eq!(payload["service"], "DIGITAL STRATEGY AUDIT");
        assert_eq!(payload["date"], "2024-06-10");
        assert_eq!(payload["time"], "15:00");
        assert_eq!(payload["status"], booking::STATUS_PENDING);
        assert_eq!(payload["clientWhatsapp"], "+1555000111");
    }

    #[test]
    fn complete_booking_success_clears_the_buffer() {
        let mut view = filled_booking_view();
        begin_booking(&mut view).unwrap();
        complete_booking(&mut view, true);
        assert_eq!(view.booking_status, SubmitStatus::Success);
        assert!(view.booking_form.date.is_none());
        assert!(view.booking_form.client_name.is_empty());
    }
}
