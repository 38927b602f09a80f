//! Document payloads and read results.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::path::DocumentPath;
use crate::query::Cursor;

/// Field map of one document, as stored.
pub type Fields = Map<String, Value>;

/// Encode a serializable value into a document field map.
///
/// The value must serialize to a JSON object; anything else is a
/// `Serialization` error.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(format!(
            "document body must be a JSON object, got {}",
            value_type_name(&other)
        ))),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reference to a newly created document.
#[derive(Debug, Clone)]
pub struct DocumentRef {
    path: DocumentPath,
}

impl DocumentRef {
    pub fn new(path: DocumentPath) -> Self {
        Self { path }
    }

    /// Store-assigned id of the document.
    pub fn id(&self) -> &str {
        self.path.id()
    }

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }
}

/// Result of reading one document.
///
/// A lookup that finds nothing still returns a snapshot; callers check
/// `exists()` before decoding. This mirrors the hosted client, which
/// reports absence in-band rather than as an error.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    path: DocumentPath,
    fields: Option<Fields>,
}

impl DocumentSnapshot {
    /// Snapshot of a document that was found.
    pub fn found(path: DocumentPath, fields: Fields) -> Self {
        Self {
            path,
            fields: Some(fields),
        }
    }

    /// Snapshot of a document that was not found.
    pub fn missing(path: DocumentPath) -> Self {
        Self { path, fields: None }
    }

    pub fn exists(&self) -> bool {
        self.fields.is_some()
    }

    /// Id of the document this snapshot describes.
    pub fn id(&self) -> &str {
        self.path.id()
    }

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }

    /// Raw field map, when the document exists.
    pub fn fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    /// Decode the document into a typed value.
    ///
    /// Returns `None` for a missing document. A present document that
    /// does not decode is a `Serialization` error.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, StoreError> {
        match &self.fields {
            Some(fields) => {
                let decoded = serde_json::from_value(Value::Object(fields.clone()))?;
                Ok(Some(decoded))
            }
            None => Ok(None),
        }
    }

    /// Cursor positioned at this document, for requesting the next page.
    pub fn cursor(&self) -> Cursor {
        Cursor::at(self.id())
    }
}
