//! Repository for the `comments` subcollection under each proposal.

use std::sync::Arc;

use questboard_events::names::EVT_COMMENT_CREATED;
use questboard_events::{BoardEvent, EntityKind, EventBus};
use questboard_store::{
    to_fields, CollectionPath, Cursor, DocumentRef, DocumentSnapshot, Query, StoreError,
    StoreHandle,
};
use serde::Serialize;

use crate::names::{COMMENTS, PROPOSALS};
use crate::pagination;

/// Stores and pages the comment thread of a proposal.
///
/// Comment bodies are caller-defined; the thread stores whatever object
/// the caller serializes, without validating its shape.
pub struct CommentThread {
    store: StoreHandle,
    events: Option<Arc<EventBus>>,
    proposals: CollectionPath,
}

impl CommentThread {
    /// Create a new thread accessor over the given store.
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            events: None,
            proposals: CollectionPath::new(PROPOSALS),
        }
    }

    /// Wire an event bus; subsequent comments publish board events.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Append a comment to the proposal's thread.
    pub async fn create<T: Serialize>(
        &self,
        proposal_id: &str,
        comment: &T,
    ) -> Result<DocumentRef, StoreError> {
        let collection = self.proposals.doc(proposal_id).subcollection(COMMENTS);
        let doc_ref = self
            .store
            .add_document(&collection, to_fields(comment)?)
            .await?;
        tracing::debug!(proposal_id = %proposal_id, comment_id = %doc_ref.id(), "Created comment");

        self.publish(
            BoardEvent::new(EVT_COMMENT_CREATED).with_source(EntityKind::Proposal, proposal_id),
        );
        Ok(doc_ref)
    }

    /// Fetch the next page of the thread in the store's default order.
    ///
    /// Pass `None` for the first page and the last snapshot's cursor for
    /// each following page.
    pub async fn next_page(
        &self,
        proposal_id: &str,
        cursor: Option<Cursor>,
        page_size: usize,
    ) -> Result<Vec<DocumentSnapshot>, StoreError> {
        let collection = self.proposals.doc(proposal_id).subcollection(COMMENTS);
        pagination::fetch_page(&self.store, &collection, Query::new(), cursor, page_size).await
    }

    fn publish(&self, event: BoardEvent) {
        if let Some(events) = &self.events {
            events.publish(event);
        }
    }
}
