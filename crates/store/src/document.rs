//! Raw document values, collection ordering, and the server-timestamp
//! sentinel.

use std::cmp::Ordering;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use nexus_core::DocId;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A raw store document: the store-assigned id plus its JSON fields.
///
/// The id is carried outside the fields; typed decoding
/// ([`crate::typed::decode_document`]) folds it back in for entities that
/// declare an `id` field.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocId,
    pub fields: Value,
}

// ---------------------------------------------------------------------------
// OrderBy
// ---------------------------------------------------------------------------

/// Collection subscription ordering on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub descending: bool,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Compare two documents by the order field.
    ///
    /// A document missing the field sorts last regardless of direction.
    /// Strings compare lexically (the `period` field deliberately carries
    /// this limitation), numbers numerically, booleans false-first.
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let a_field = a.fields.get(&self.field);
        let b_field = b.fields.get(&self.field);
        match (a_field, b_field) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ordering = compare_values(a, b);
                if self.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Server timestamps
// ---------------------------------------------------------------------------

/// Marker value a writer places in a field to request the creation time be
/// assigned by the store at write application.
const SERVER_TIMESTAMP_SENTINEL: &str = "__server_timestamp__";

/// The server-timestamp sentinel, as a JSON value.
pub fn server_timestamp() -> Value {
    Value::String(SERVER_TIMESTAMP_SENTINEL.into())
}

/// Replace every sentinel in `fields` (recursively) with the current UTC
/// time.
///
/// The resolved form is RFC 3339 with microsecond precision, so the lexical
/// order of resolved timestamps equals their chronological order.
pub fn resolve_server_timestamps(fields: &mut Value) {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    resolve_with(fields, &now);
}

fn resolve_with(value: &mut Value, now: &str) {
    match value {
        Value::String(s) if s == SERVER_TIMESTAMP_SENTINEL => {
            *value = Value::String(now.to_string());
        }
        Value::Object(map) => {
            for entry in map.values_mut() {
                resolve_with(entry, now);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                resolve_with(item, now);
            }
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
