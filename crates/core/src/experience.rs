//! Work experience entries (`experiences` collection).

use serde::{Deserialize, Serialize};

use crate::types::DocId;

/// Collection name in the content store.
pub const COLLECTION: &str = "experiences";

/// Field used to order the experience list for display.
///
/// The sort is a descending lexical string compare, not a date parse.
/// "2021 - Present" happens to sort above "2019 - 2021" with the shipped
/// data; mixed-width years would not order correctly. Known limitation,
/// carried as-is.
pub const ORDER_FIELD: &str = "period";

/// A work experience card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: DocId,
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Partial update for an experience. All fields optional; only present
/// fields are written.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_serializes_only_present_fields() {
        let update = UpdateExperience {
            role: Some("LEAD STRATEGIST".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["role"], "LEAD STRATEGIST");
    }

    #[test]
    fn experience_tolerates_missing_logo_and_tasks() {
        let exp: Experience = serde_json::from_value(serde_json::json!({
            "id": "x1",
            "company": "ACME",
            "role": "ENGINEER",
            "period": "2020 - 2022",
        }))
        .unwrap();
        assert_eq!(exp.logo, "");
        assert!(exp.tasks.is_empty());
    }
}
