//! Repository for the `proposals` collection and its `statusTimeline`
//! subcollection.

use std::sync::Arc;

use chrono::Utc;
use questboard_core::{ProposalStatus, SCHEMA_VERSION};
use questboard_events::names::{
    EVT_PROPOSAL_CREATED, EVT_PROPOSAL_FINALIZED, EVT_PROPOSAL_STATUS_CHANGED,
};
use questboard_events::{BoardEvent, EntityKind, EventBus};
use questboard_store::{
    to_fields, CollectionPath, Cursor, Direction, DocumentRef, DocumentSnapshot, Query, StoreError,
    StoreHandle, Updates,
};
use serde_json::json;

use crate::models::proposal::{ProposalDraft, StatusTimelineEntry};
use crate::names::{
    FIELD_CREATED_AT, FIELD_REPLY, FIELD_SCHEMA_VERSION, FIELD_STATUS, PROPOSALS, STATUS_TIMELINE,
};
use crate::pagination;

/// Provides create, read, and moderation operations for proposals.
pub struct ProposalRepo {
    store: StoreHandle,
    events: Option<Arc<EventBus>>,
    proposals: CollectionPath,
}

impl ProposalRepo {
    /// Create a new repository over the given store.
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            events: None,
            proposals: CollectionPath::new(PROPOSALS),
        }
    }

    /// Wire an event bus; subsequent writes publish board events.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Create a proposal from author-supplied content.
    ///
    /// The stored document carries every draft field plus the stamped
    /// `schemaVersion`, `status`, and `createdAt`. Status is forced to
    /// `pending` regardless of what the draft carries.
    pub async fn create(&self, draft: &ProposalDraft) -> Result<DocumentRef, StoreError> {
        let mut doc = to_fields(draft)?;
        doc.insert(FIELD_SCHEMA_VERSION.to_string(), SCHEMA_VERSION.into());
        doc.insert(
            FIELD_STATUS.to_string(),
            ProposalStatus::Pending.as_str().into(),
        );
        doc.insert(
            FIELD_CREATED_AT.to_string(),
            serde_json::to_value(Utc::now())?,
        );

        let doc_ref = self.store.add_document(&self.proposals, doc).await?;
        tracing::debug!(proposal_id = %doc_ref.id(), "Created proposal");

        self.publish(
            BoardEvent::new(EVT_PROPOSAL_CREATED)
                .with_source(EntityKind::Proposal, doc_ref.id())
                .with_actor(draft.author.uid.as_str())
                .with_payload(json!({ "title": draft.title })),
        );
        Ok(doc_ref)
    }

    /// Fetch one proposal. Absence is reported by the snapshot, not as
    /// an error.
    pub async fn get(&self, id: &str) -> Result<DocumentSnapshot, StoreError> {
        self.store.get_document(&self.proposals.doc(id)).await
    }

    /// Fetch the next page of proposals in any of the given statuses.
    ///
    /// Pass `None` for the first page and the last snapshot's cursor for
    /// each following page. The query carries no ordering clause, so
    /// pages come back in the store's default document order; the cursor
    /// is only valid while the status set stays the same.
    pub async fn next_page(
        &self,
        cursor: Option<Cursor>,
        page_size: usize,
        statuses: &[ProposalStatus],
    ) -> Result<Vec<DocumentSnapshot>, StoreError> {
        let values = statuses
            .iter()
            .map(|status| status.as_str().into())
            .collect();
        let query = Query::new().filter_in(FIELD_STATUS, values);
        pagination::fetch_page(&self.store, &self.proposals, query, cursor, page_size).await
    }

    /// Move a proposal to a new status.
    ///
    /// Appends a timeline entry first, then updates the parent document.
    /// The two writes are independent; a failure after the first leaves
    /// a timeline entry with no matching status on the parent.
    pub async fn change_status(
        &self,
        id: &str,
        new_status: ProposalStatus,
    ) -> Result<(), StoreError> {
        self.append_timeline_entry(id, new_status).await?;
        self.store
            .update_document(
                &self.proposals.doc(id),
                Updates::new().set(FIELD_STATUS, new_status.as_str()),
            )
            .await?;
        tracing::debug!(proposal_id = %id, status = %new_status, "Changed proposal status");

        self.publish(
            BoardEvent::new(EVT_PROPOSAL_STATUS_CHANGED)
                .with_source(EntityKind::Proposal, id)
                .with_payload(json!({ "status": new_status.as_str() })),
        );
        Ok(())
    }

    /// Resolve a proposal with a final status and a moderator reply.
    ///
    /// Delegates to [`change_status`](Self::change_status) and then
    /// writes the reply as a third independent write.
    pub async fn finalize(
        &self,
        id: &str,
        new_status: ProposalStatus,
        reply: &str,
    ) -> Result<(), StoreError> {
        self.change_status(id, new_status).await?;
        self.store
            .update_document(
                &self.proposals.doc(id),
                Updates::new().set(FIELD_REPLY, reply),
            )
            .await?;
        tracing::debug!(proposal_id = %id, status = %new_status, "Finalized proposal");

        self.publish(
            BoardEvent::new(EVT_PROPOSAL_FINALIZED)
                .with_source(EntityKind::Proposal, id)
                .with_payload(json!({ "status": new_status.as_str(), "reply": reply })),
        );
        Ok(())
    }

    /// Full status history of a proposal, oldest first.
    pub async fn timeline(&self, id: &str) -> Result<Vec<StatusTimelineEntry>, StoreError> {
        let collection = self.proposals.doc(id).subcollection(STATUS_TIMELINE);
        let query = Query::new().order_by(FIELD_CREATED_AT, Direction::Ascending);
        let snapshots = self.store.run_query(&collection, query).await?;

        let mut entries = Vec::with_capacity(snapshots.len());
        for snapshot in &snapshots {
            if let Some(entry) = snapshot.decode()? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    async fn append_timeline_entry(
        &self,
        id: &str,
        status: ProposalStatus,
    ) -> Result<(), StoreError> {
        let entry = StatusTimelineEntry {
            schema_version: SCHEMA_VERSION,
            status,
            created_at: Utc::now(),
        };
        let collection = self.proposals.doc(id).subcollection(STATUS_TIMELINE);
        self.store
            .add_document(&collection, to_fields(&entry)?)
            .await?;
        Ok(())
    }

    fn publish(&self, event: BoardEvent) {
        if let Some(events) = &self.events {
            events.publish(event);
        }
    }
}
