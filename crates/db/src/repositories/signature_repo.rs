//! Repository for the `signatures` subcollection under each proposal.

use std::sync::Arc;

use chrono::Utc;
use questboard_core::SCHEMA_VERSION;
use questboard_events::names::EVT_PROPOSAL_SIGNED;
use questboard_events::{BoardEvent, EntityKind, EventBus};
use questboard_store::{
    to_fields, CollectionPath, Query, StoreError, StoreHandle, Updates,
};

use crate::models::proposal::Signature;
use crate::models::user::User;
use crate::names::{FIELD_SIGNATURES_COUNT, FIELD_UID, PROPOSALS, SIGNATURES};

/// How many signatures the proposal card preview shows.
pub const SIGNATURE_PREVIEW_COUNT: usize = 3;

/// Records signatures and maintains the denormalized count on the
/// parent proposal.
pub struct SignatureLedger {
    store: StoreHandle,
    events: Option<Arc<EventBus>>,
    proposals: CollectionPath,
}

impl SignatureLedger {
    /// Create a new ledger over the given store.
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            events: None,
            proposals: CollectionPath::new(PROPOSALS),
        }
    }

    /// Wire an event bus; subsequent signings publish board events.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Whether `uid` has already signed the proposal.
    ///
    /// Read-only; callers check this before [`sign`](Self::sign), and
    /// nothing stops two concurrent callers both seeing `false`.
    pub async fn is_already_signed(
        &self,
        proposal_id: &str,
        uid: &str,
    ) -> Result<bool, StoreError> {
        let collection = self.proposals.doc(proposal_id).subcollection(SIGNATURES);
        let query = Query::new().filter_eq(FIELD_UID, uid);
        let snapshots = self.store.run_query(&collection, query).await?;
        Ok(!snapshots.is_empty())
    }

    /// Record a signature and bump the parent's `signaturesCount`.
    ///
    /// Two independent writes: the signature document first, then the
    /// increment. A failure between them leaves a signature the count
    /// does not reflect. Not idempotent; signing twice records two
    /// documents and counts both.
    pub async fn sign(&self, proposal_id: &str, signer: &User) -> Result<(), StoreError> {
        let signature = Signature {
            schema_version: SCHEMA_VERSION,
            uid: signer.uid.clone(),
            display_name: signer.display_name.clone(),
            photo_url: signer.photo_url.clone(),
            created_at: Utc::now(),
        };
        let collection = self.proposals.doc(proposal_id).subcollection(SIGNATURES);
        self.store
            .add_document(&collection, to_fields(&signature)?)
            .await?;

        self.store
            .update_document(
                &self.proposals.doc(proposal_id),
                Updates::new().increment(FIELD_SIGNATURES_COUNT, 1),
            )
            .await?;
        tracing::debug!(proposal_id = %proposal_id, uid = %signer.uid, "Signed proposal");

        self.publish(
            BoardEvent::new(EVT_PROPOSAL_SIGNED)
                .with_source(EntityKind::Proposal, proposal_id)
                .with_actor(signer.uid.as_str()),
        );
        Ok(())
    }

    /// Up to [`SIGNATURE_PREVIEW_COUNT`] signatures for the card preview.
    ///
    /// The query carries no ordering clause; these are the newest
    /// signatures only where the backend's default order is insertion
    /// order.
    pub async fn newest(&self, proposal_id: &str) -> Result<Vec<Signature>, StoreError> {
        let collection = self.proposals.doc(proposal_id).subcollection(SIGNATURES);
        let query = Query::new().limit(SIGNATURE_PREVIEW_COUNT);
        let snapshots = self.store.run_query(&collection, query).await?;

        let mut signatures = Vec::with_capacity(snapshots.len());
        for snapshot in &snapshots {
            if let Some(signature) = snapshot.decode()? {
                signatures.push(signature);
            }
        }
        Ok(signatures)
    }

    fn publish(&self, event: BoardEvent) {
        if let Some(events) = &self.events {
            events.publish(event);
        }
    }
}
