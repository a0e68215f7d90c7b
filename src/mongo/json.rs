//! JSON <-> BSON conversion
//!
//! Tool arguments arrive as JSON and are read as MongoDB Extended JSON.
//! Returned documents are written as plain JSON with identifiers as strings.

use mongodb::bson::spec::BinarySubtype;
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// Convert a JSON object into a BSON document.
///
/// Extended JSON wrappers such as `{"$oid": ...}` become native BSON values;
/// query operators like `$gt` are left as ordinary keys.
pub fn to_document(value: Value) -> StoreResult<Document> {
    match value {
        Value::Object(map) => Document::try_from(map).map_err(|e| StoreError::InvalidDocument {
            message: e.to_string(),
        }),
        other => Err(StoreError::InvalidDocument {
            message: format!("expected a JSON object, got {}", json_type_name(&other)),
        }),
    }
}

/// Convert a JSON object into a BSON document, treating `null` as absent
pub fn to_optional_document(value: Option<Value>) -> StoreResult<Option<Document>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => to_document(v).map(Some),
    }
}

/// Convert a BSON document into a JSON object.
///
/// `_id` values are always JSON scalars: identifiers without a JSON
/// counterpart are written as strings.
pub fn to_json(document: Document) -> Value {
    let map: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| {
            let converted = if key == "_id" {
                id_to_json(value)
            } else {
                bson_to_json(value)
            };
            (key, converted)
        })
        .collect();
    Value::Object(map)
}

/// Serialize documents as a JSON array
pub fn documents_to_json_string(documents: Vec<Document>) -> serde_json::Result<String> {
    let values: Vec<Value> = documents.into_iter().map(to_json).collect();
    serde_json::to_string(&values)
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

fn id_to_json(value: Bson) -> Value {
    match value {
        Bson::Binary(bin) if bin.subtype == BinarySubtype::Uuid => {
            match uuid::Uuid::from_slice(&bin.bytes) {
                Ok(id) => Value::String(id.to_string()),
                Err(_) => Value::String(Bson::Binary(bin).into_relaxed_extjson().to_string()),
            }
        }
        other => match bson_to_json(other) {
            v @ (Value::Object(_) | Value::Array(_)) => Value::String(v.to_string()),
            v => v,
        },
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
