//! Repository layer over the document store.
//!
//! Each repository owns the collection paths it touches and takes the
//! store handle at construction. Multi-document operations issue their
//! writes sequentially without a transaction; a failure between writes
//! leaves the earlier writes in place.

pub mod comment_repo;
pub mod proposal_repo;
pub mod quest_repo;
pub mod signature_repo;
pub mod user_repo;

pub use comment_repo::CommentThread;
pub use proposal_repo::ProposalRepo;
pub use quest_repo::QuestRepo;
pub use signature_repo::{SignatureLedger, SIGNATURE_PREVIEW_COUNT};
pub use user_repo::UserRepo;
