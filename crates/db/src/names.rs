//! Well-known collection and field names in the hosted store.
//!
//! Field names are camelCase because documents were first written by the
//! web front-end; the serde renames on the models must stay in step with
//! these constants.

/// Top-level proposals collection.
pub const PROPOSALS: &str = "proposals";

/// Top-level quests collection.
pub const QUESTS: &str = "quests";

/// Top-level users collection, keyed by uid.
pub const USERS: &str = "users";

/// Signature subcollection under a proposal.
pub const SIGNATURES: &str = "signatures";

/// Status timeline subcollection under a proposal.
pub const STATUS_TIMELINE: &str = "statusTimeline";

/// Comment subcollection under a proposal.
pub const COMMENTS: &str = "comments";

/// `schemaVersion` field on versioned documents.
pub const FIELD_SCHEMA_VERSION: &str = "schemaVersion";

/// `status` field on a proposal document.
pub const FIELD_STATUS: &str = "status";

/// `createdAt` field stamped on created documents.
pub const FIELD_CREATED_AT: &str = "createdAt";

/// `signaturesCount` denormalized counter on a proposal.
pub const FIELD_SIGNATURES_COUNT: &str = "signaturesCount";

/// `reply` field written by finalization.
pub const FIELD_REPLY: &str = "reply";

/// `uid` field on signature and user documents.
pub const FIELD_UID: &str = "uid";
