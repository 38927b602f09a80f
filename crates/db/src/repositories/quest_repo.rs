//! Repository for the `quests` collection.

use std::sync::Arc;

use chrono::Utc;
use questboard_core::SCHEMA_VERSION;
use questboard_events::names::EVT_QUEST_CREATED;
use questboard_events::{BoardEvent, EntityKind, EventBus};
use questboard_store::{
    to_fields, CollectionPath, Cursor, DocumentRef, DocumentSnapshot, Query, StoreError,
    StoreHandle,
};
use serde_json::json;

use crate::models::quest::QuestDraft;
use crate::names::{FIELD_CREATED_AT, FIELD_SCHEMA_VERSION, QUESTS};
use crate::pagination;

/// Provides create and read operations for quests.
pub struct QuestRepo {
    store: StoreHandle,
    events: Option<Arc<EventBus>>,
    quests: CollectionPath,
}

impl QuestRepo {
    /// Create a new repository over the given store.
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            events: None,
            quests: CollectionPath::new(QUESTS),
        }
    }

    /// Wire an event bus; subsequent writes publish board events.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Create a quest, stamping `schemaVersion` and `createdAt`.
    pub async fn create(&self, draft: &QuestDraft) -> Result<DocumentRef, StoreError> {
        let mut doc = to_fields(draft)?;
        doc.insert(FIELD_SCHEMA_VERSION.to_string(), SCHEMA_VERSION.into());
        doc.insert(
            FIELD_CREATED_AT.to_string(),
            serde_json::to_value(Utc::now())?,
        );

        let doc_ref = self.store.add_document(&self.quests, doc).await?;
        tracing::debug!(quest_id = %doc_ref.id(), "Created quest");

        self.publish(
            BoardEvent::new(EVT_QUEST_CREATED)
                .with_source(EntityKind::Quest, doc_ref.id())
                .with_payload(json!({
                    "title": draft.title,
                    "urgency": draft.urgency.as_str(),
                })),
        );
        Ok(doc_ref)
    }

    /// Fetch one quest. Absence is reported by the snapshot, not as an
    /// error.
    pub async fn get(&self, id: &str) -> Result<DocumentSnapshot, StoreError> {
        self.store.get_document(&self.quests.doc(id)).await
    }

    /// Fetch the next page of quests in the store's default order.
    pub async fn next_page(
        &self,
        cursor: Option<Cursor>,
        page_size: usize,
    ) -> Result<Vec<DocumentSnapshot>, StoreError> {
        pagination::fetch_page(&self.store, &self.quests, Query::new(), cursor, page_size).await
    }

    fn publish(&self, event: BoardEvent) {
        if let Some(events) = &self.events {
            events.publish(event);
        }
    }
}
