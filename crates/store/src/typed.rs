//! Typed decoding at the store boundary.
//!
//! Snapshots arrive as raw JSON documents; the engine works in the strongly
//! typed entities of `nexus-core`. Decoding folds the store-assigned id
//! into the fields and skips malformed documents with a warning instead of
//! failing the whole snapshot.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::document::Document;
use crate::error::StoreError;

/// Decode a collection snapshot, skipping documents that do not match the
/// entity schema.
pub fn decode_collection<T: DeserializeOwned>(docs: &[Document]) -> Vec<T> {
    docs.iter().filter_map(decode_document).collect()
}

/// Decode one document into an entity, folding the id into the fields.
///
/// Returns `None` (after a warning) when the document does not decode; a
/// single malformed document must not take the read-model down.
pub fn decode_document<T: DeserializeOwned>(doc: &Document) -> Option<T> {
    let mut fields = doc.fields.clone();
    if let Some(map) = fields.as_object_mut() {
        map.insert("id".into(), Value::String(doc.id.clone()));
    }
    match serde_json::from_value(fields) {
        Ok(entity) => Some(entity),
        Err(error) => {
            tracing::warn!(id = %doc.id, %error, "Skipping malformed document");
            None
        }
    }
}

/// Encode an entity into document fields, stripping the `id` (the id lives
/// in the document key, never in its fields).
pub fn encode_fields<T: Serialize>(entity: &T) -> Result<Value, StoreError> {
    let mut fields = serde_json::to_value(entity)?;
    if let Some(map) = fields.as_object_mut() {
        map.remove("id");
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::experience::Experience;
    use serde_json::json;

    fn doc(id: &str, fields: Value) -> Document {
        Document {
            id: id.into(),
            fields,
        }
    }

    #[test]
    fn decode_folds_the_id_into_the_entity() {
        let exp: Experience = decode_document(&doc(
            "e7",
            json!({ "company": "ACME", "role": "ENGINEER", "period": "2020 - 2022" }),
        ))
        .unwrap();
        assert_eq!(exp.id, "e7");
        assert_eq!(exp.company, "ACME");
    }

    #[test]
    fn malformed_documents_are_skipped_not_fatal() {
        let docs = vec![
            doc("good", json!({ "company": "ACME", "role": "X", "period": "2020" })),
            doc("bad", json!({ "company": 42 })),
        ];
        let decoded: Vec<Experience> = decode_collection(&docs);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, "good");
    }

    #[test]
    fn encode_strips_the_id() {
        let exp = Experience {
            id: "e7".into(),
            company: "ACME".into(),
            role: "ENGINEER".into(),
            period: "2020 - 2022".into(),
            logo: String::new(),
            tasks: vec![],
        };
        let fields = encode_fields(&exp).unwrap();
        assert!(fields.get("id").is_none());
        assert_eq!(fields["company"], "ACME");
    }
}
