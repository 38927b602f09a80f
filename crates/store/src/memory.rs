//! In-memory store backend for tests and local development.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::{DocumentRef, DocumentSnapshot, Fields};
use crate::error::StoreError;
use crate::path::{CollectionPath, DocumentPath};
use crate::query::{Direction, Filter, Query};
use crate::store::DocumentStore;
use crate::update::{FieldUpdate, Updates};

/// One stored document plus its global insertion sequence number.
#[derive(Debug, Clone)]
struct StoredDoc {
    seq: u64,
    fields: Fields,
}

#[derive(Debug, Default)]
struct Inner {
    /// Documents keyed by collection path, then by document id.
    collections: HashMap<String, HashMap<String, StoredDoc>>,
    /// Monotonic counter ordering all inserts across collections.
    next_seq: u64,
}

/// Process-local [`DocumentStore`] backend.
///
/// Default document order is insertion order. Queries and updates see
/// writes immediately; there is no replication lag to simulate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn add_document(
        &self,
        collection: &CollectionPath,
        fields: Fields,
    ) -> Result<DocumentRef, StoreError> {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let id = Uuid::new_v4().to_string();
        inner
            .collections
            .entry(collection.as_str().to_string())
            .or_default()
            .insert(id.clone(), StoredDoc { seq, fields });
        Ok(DocumentRef::new(collection.doc(id)))
    }

    async fn set_document(&self, path: &DocumentPath, fields: Fields) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let Inner {
            collections,
            next_seq,
        } = &mut *inner;
        let docs = collections
            .entry(path.collection().as_str().to_string())
            .or_default();
        match docs.get_mut(path.id()) {
            // Overwrites keep their place in the default ordering.
            Some(existing) => existing.fields = fields,
            None => {
                let seq = *next_seq;
                *next_seq += 1;
                docs.insert(path.id().to_string(), StoredDoc { seq, fields });
            }
        }
        Ok(())
    }

    async fn get_document(&self, path: &DocumentPath) -> Result<DocumentSnapshot, StoreError> {
        let inner = self.inner.read().await;
        let found = inner
            .collections
            .get(path.collection().as_str())
            .and_then(|docs| docs.get(path.id()));
        match found {
            Some(doc) => Ok(DocumentSnapshot::found(path.clone(), doc.fields.clone())),
            None => Ok(DocumentSnapshot::missing(path.clone())),
        }
    }

    async fn run_query(
        &self,
        collection: &CollectionPath,
        query: Query,
    ) -> Result<Vec<DocumentSnapshot>, StoreError> {
        let inner = self.inner.read().await;
        let Some(docs) = inner.collections.get(collection.as_str()) else {
            return Ok(Vec::new());
        };

        let mut rows: Vec<(&String, &StoredDoc)> = docs
            .iter()
            .filter(|(_, doc)| matches_filters(&doc.fields, &query.filters))
            .collect();
        rows.sort_by_key(|(_, doc)| doc.seq);

        if let Some(order) = &query.order_by {
            // Stable sort, so equal keys keep insertion order.
            rows.sort_by(|(_, a), (_, b)| {
                let ordering =
                    compare_field(a.fields.get(&order.field), b.fields.get(&order.field));
                match order.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        let start = match &query.start_after {
            Some(cursor) => {
                match rows.iter().position(|(id, _)| id.as_str() == cursor.doc_id()) {
                    Some(index) => index + 1,
                    // The cursor's document is not in the current
                    // ordering (filter changed, or it never matched):
                    // unspecified per the pagination contract, rendered
                    // here as an empty page.
                    None => rows.len(),
                }
            }
            None => 0,
        };
        let end = match query.limit {
            Some(limit) => rows.len().min(start.saturating_add(limit)),
            None => rows.len(),
        };

        let snapshots = rows[start..end]
            .iter()
            .map(|(id, doc)| DocumentSnapshot::found(collection.doc(id.as_str()), doc.fields.clone()))
            .collect();
        Ok(snapshots)
    }

    async fn update_document(
        &self,
        path: &DocumentPath,
        updates: Updates,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let doc = inner
            .collections
            .get_mut(path.collection().as_str())
            .and_then(|docs| docs.get_mut(path.id()))
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_string(),
            })?;
        for (field, update) in updates.fields {
            match update {
                FieldUpdate::Set(value) => {
                    doc.fields.insert(field, value);
                }
                FieldUpdate::Increment(n) => {
                    let current = doc.fields.get(&field).and_then(Value::as_i64).unwrap_or(0);
                    doc.fields.insert(field, Value::from(current + n));
                }
            }
        }
        Ok(())
    }
}

fn matches_filters(fields: &Fields, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| match filter {
        Filter::Eq { field, value } => fields.get(field) == Some(value),
        Filter::In { field, values } => fields
            .get(field)
            .map(|actual| values.contains(actual))
            .unwrap_or(false),
    })
}

/// Documents missing the ordering field sort first.
fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_values(a, b),
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => compare_strings(a, b),
        (a, b) => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Timestamps are stored as RFC 3339 strings. Compare them as instants
/// so mixed fractional precision still orders chronologically.
fn compare_strings(a: &str, b: &str) -> Ordering {
    match (
        chrono::DateTime::parse_from_rfc3339(a),
        chrono::DateTime::parse_from_rfc3339(b),
    ) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
