#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use questboard_core::{Role, SCHEMA_VERSION};
use questboard_db::models::user::User;
use questboard_store::{
    CollectionPath, DocumentPath, DocumentRef, DocumentSnapshot, DocumentStore, Fields,
    MemoryStore, Query, StoreError, StoreHandle, Updates,
};

/// Fresh in-memory store behind the handle type repositories take.
pub fn mem_store() -> StoreHandle {
    Arc::new(MemoryStore::new())
}

/// Regular-role profile with fields derived from `uid`.
pub fn test_user(uid: &str) -> User {
    User {
        schema_version: SCHEMA_VERSION,
        uid: uid.to_string(),
        display_name: format!("User {uid}"),
        photo_url: format!("https://avatars.example/{uid}.png"),
        role: Role::User,
    }
}

/// Admin-role variant of [`test_user`].
pub fn admin_user(uid: &str) -> User {
    User {
        role: Role::Admin,
        ..test_user(uid)
    }
}

/// Store wrapper that starts failing writes once a budget is spent.
///
/// Reads always pass through to the wrapped [`MemoryStore`]. Each
/// successful write (add, set, update) consumes one unit of budget;
/// after that, every write returns a backend error. Lets tests observe
/// multi-write operations that stopped partway through.
pub struct FailingStore {
    inner: MemoryStore,
    writes_left: AtomicUsize,
}

impl FailingStore {
    /// Allow `writes` successful writes, then fail all further ones.
    pub fn failing_after(writes: usize) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::new(),
            writes_left: AtomicUsize::new(writes),
        })
    }

    fn consume_write(&self) -> Result<(), StoreError> {
        self.writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .map(|_| ())
            .map_err(|_| StoreError::Backend("injected write failure".to_string()))
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn add_document(
        &self,
        collection: &CollectionPath,
        fields: Fields,
    ) -> Result<DocumentRef, StoreError> {
        self.consume_write()?;
        self.inner.add_document(collection, fields).await
    }

    async fn set_document(&self, path: &DocumentPath, fields: Fields) -> Result<(), StoreError> {
        self.consume_write()?;
        self.inner.set_document(path, fields).await
    }

    async fn get_document(&self, path: &DocumentPath) -> Result<DocumentSnapshot, StoreError> {
        self.inner.get_document(path).await
    }

    async fn run_query(
        &self,
        collection: &CollectionPath,
        query: Query,
    ) -> Result<Vec<DocumentSnapshot>, StoreError> {
        self.inner.run_query(collection, query).await
    }

    async fn update_document(
        &self,
        path: &DocumentPath,
        updates: Updates,
    ) -> Result<(), StoreError> {
        self.consume_write()?;
        self.inner.update_document(path, updates).await
    }
}
