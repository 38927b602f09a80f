//! Well-known event name constants.
//!
//! Dot-separated, `entity.action`. Subscribers match on these rather
//! than parsing the event type.

/// A quest was created on the board.
pub const EVT_QUEST_CREATED: &str = "quest.created";

/// A proposal was created (always in pending status).
pub const EVT_PROPOSAL_CREATED: &str = "proposal.created";

/// A user signed a proposal.
pub const EVT_PROPOSAL_SIGNED: &str = "proposal.signed";

/// A proposal moved to a new lifecycle status.
pub const EVT_PROPOSAL_STATUS_CHANGED: &str = "proposal.status_changed";

/// A proposal was finalized with a reply.
pub const EVT_PROPOSAL_FINALIZED: &str = "proposal.finalized";

/// A comment was added to a proposal.
pub const EVT_COMMENT_CREATED: &str = "comment.created";
