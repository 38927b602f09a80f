//! The store contract every repository depends on.

use std::sync::Arc;

use async_trait::async_trait;

use crate::document::{DocumentRef, DocumentSnapshot, Fields};
use crate::error::StoreError;
use crate::path::{CollectionPath, DocumentPath};
use crate::query::Query;
use crate::update::Updates;

/// Async contract of the hosted document database.
///
/// Repositories take this trait rather than a concrete client so tests
/// can substitute [`crate::MemoryStore`] or a failure-injecting double.
/// Every call is one independent round-trip; the contract has no
/// transaction or batch primitive, so multi-write operations layered on
/// top are not atomic and can be observed half-applied.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document with a store-assigned id and return its
    /// reference.
    async fn add_document(
        &self,
        collection: &CollectionPath,
        fields: Fields,
    ) -> Result<DocumentRef, StoreError>;

    /// Write a document at a caller-chosen path, replacing any existing
    /// fields.
    async fn set_document(&self, path: &DocumentPath, fields: Fields) -> Result<(), StoreError>;

    /// Fetch one document. Absence is reported by the snapshot, not as
    /// an error.
    async fn get_document(&self, path: &DocumentPath) -> Result<DocumentSnapshot, StoreError>;

    /// Execute a query and return matching snapshots in query order.
    async fn run_query(
        &self,
        collection: &CollectionPath,
        query: Query,
    ) -> Result<Vec<DocumentSnapshot>, StoreError>;

    /// Apply field updates to an existing document.
    ///
    /// Fails with `NotFound` when the document does not exist; updates
    /// never create documents.
    async fn update_document(&self, path: &DocumentPath, updates: Updates)
        -> Result<(), StoreError>;
}

/// Shared store handle repositories hold from construction.
pub type StoreHandle = Arc<dyn DocumentStore>;
