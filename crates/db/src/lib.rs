//! Data access layer for the quest board.
//!
//! Typed repositories over the document store contract: proposals with
//! their status timeline, the signature ledger, comment threads, quests,
//! and user profiles. Each repository is constructed with a store handle
//! (and optionally an event bus) so tests can run the same code against
//! the in-memory backend.
//!
//! Multi-write operations (`change_status`, `finalize`, `sign`) issue
//! independent store calls with no transaction around them. A failing
//! later write leaves the earlier writes committed and surfaces only its
//! own error; callers and tests can observe the intermediate state.

pub mod models;
pub mod names;
pub mod pagination;
pub mod repositories;

pub use pagination::{clamp_page_size, fetch_page, is_last_page, MAX_PAGE_SIZE};
pub use repositories::{
    CommentThread, ProposalRepo, QuestRepo, SignatureLedger, UserRepo, SIGNATURE_PREVIEW_COUNT,
};
