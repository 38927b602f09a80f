//! Proposal entity, its subcollection documents, and the create draft.

use questboard_core::{ProposalStatus, Timestamp};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Full proposal document from the `proposals` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    #[serde(default = "super::schema_version_default")]
    pub schema_version: i64,
    pub title: String,
    pub details: String,
    /// Snapshot of the creator at submission time.
    pub author: User,
    pub status: ProposalStatus,
    /// Denormalized count of signature documents. Absent until the first
    /// signature's increment creates it.
    #[serde(default)]
    pub signatures_count: i64,
    /// Moderator reply, written only by finalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    pub created_at: Timestamp,
}

/// Author-supplied content for a new proposal.
///
/// Any `status` carried here is ignored on creation; the stored document
/// always starts `pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDraft {
    pub title: String,
    pub details: String,
    pub author: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProposalStatus>,
}

/// One signature document under `proposals/{id}/signatures`.
///
/// Immutable once created. Signatures written before schema versioning
/// have no version field and decode as version 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(default = "super::schema_version_default")]
    pub schema_version: i64,
    pub uid: String,
    pub display_name: String,
    pub photo_url: String,
    pub created_at: Timestamp,
}

/// One status transition record under `proposals/{id}/statusTimeline`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTimelineEntry {
    #[serde(default = "super::schema_version_default")]
    pub schema_version: i64,
    pub status: ProposalStatus,
    pub created_at: Timestamp,
}
