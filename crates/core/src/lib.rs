//! Shared vocabulary for the quest board data layer.
//!
//! Type aliases, lifecycle enums, and constants used by every other crate
//! in the workspace. This crate carries no I/O and no store types.

pub mod role;
pub mod status;
pub mod types;
pub mod urgency;

pub use role::Role;
pub use status::ProposalStatus;
pub use types::{DocId, Timestamp, SCHEMA_VERSION};
pub use urgency::QuestUrgency;
