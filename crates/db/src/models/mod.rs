//! Domain model structs and DTOs.
//!
//! Each submodule contains a `Serialize`/`Deserialize` entity struct
//! matching the stored document shape, plus the draft DTOs used on
//! insert. Field names serialize in camelCase to match documents written
//! by earlier releases, and decoders default every field an older schema
//! version may not have written.

pub mod proposal;
pub mod quest;
pub mod user;

pub(crate) fn schema_version_default() -> i64 {
    questboard_core::SCHEMA_VERSION
}
