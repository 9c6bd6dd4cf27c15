//! Visitor contact messages (`messages` collection).

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::{DocId, Timestamp};

/// Collection name in the content store.
pub const COLLECTION: &str = "messages";

/// Field used to order messages for the admin inbox (newest first).
pub const ORDER_FIELD: &str = "timestamp";

/// Initial status assigned to every new contact message.
pub const STATUS_UNREAD: &str = "unread";

/// A persisted contact message. Immutable after creation except for
/// deletion by the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DocId,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub status: String,
    pub timestamp: Timestamp,
}

/// The visitor-facing contact form buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validate a contact submission: all three fields present, email
/// well-formed.
///
/// The email check is lenient well-formedness only, nothing stricter.
pub fn validate_contact(form: &ContactForm) -> Result<(), CoreError> {
    if form.name.trim().is_empty() {
        return Err(CoreError::Validation("Name is required".into()));
    }
    if form.email.trim().is_empty() {
        return Err(CoreError::Validation("Email is required".into()));
    }
    if !form.email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            form.email
        )));
    }
    if form.message.trim().is_empty() {
        return Err(CoreError::Validation("Message is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@agency.test".into(),
            message: "Mission parameters attached.".into(),
        }
    }

    #[test]
    fn filled_form_is_valid() {
        assert!(validate_contact(&filled_form()).is_ok());
    }

    #[test]
    fn each_missing_field_is_rejected() {
        let mut form = filled_form();
        form.name = String::new();
        assert!(validate_contact(&form).is_err());

        let mut form = filled_form();
        form.email = String::new();
        assert!(validate_contact(&form).is_err());

        let mut form = filled_form();
        form.message = "   ".into();
        assert!(validate_contact(&form).is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        form.email = "not-an-address".into();
        let err = validate_contact(&form).unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }

    #[test]
    fn message_tolerates_missing_status() {
        let msg: ContactMessage = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "name": "Ada",
            "email": "ada@agency.test",
            "message": "hello",
            "timestamp": "2024-06-10T12:00:00Z",
        }))
        .unwrap();
        assert_eq!(msg.status, "");
    }
}
