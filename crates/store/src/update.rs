//! Field updates applied to existing documents.

use serde_json::Value;

/// One field mutation.
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    /// Overwrite the field with a value.
    Set(Value),
    /// Atomically add `n` to a numeric field.
    ///
    /// A missing or non-numeric field counts as zero, matching the
    /// hosted store's increment semantics.
    Increment(i64),
}

/// Ordered field mutations for one `update_document` call.
#[derive(Debug, Clone, Default)]
pub struct Updates {
    pub fields: Vec<(String, FieldUpdate)>,
}

impl Updates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite `field` with `value`.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields
            .push((field.to_string(), FieldUpdate::Set(value.into())));
        self
    }

    /// Atomically add `n` to `field`.
    pub fn increment(mut self, field: &str, n: i64) -> Self {
        self.fields
            .push((field.to_string(), FieldUpdate::Increment(n)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
