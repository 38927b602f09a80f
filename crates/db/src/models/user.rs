//! User profile model.

use questboard_core::Role;
use serde::{Deserialize, Serialize};

/// User profile, stored in `users/{uid}` and embedded as a denormalized
/// snapshot in signatures and quest assignments.
///
/// Documents written before roles existed have no `role` field and
/// decode as [`Role::User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default = "super::schema_version_default")]
    pub schema_version: i64,
    pub uid: String,
    pub display_name: String,
    pub photo_url: String,
    #[serde(default)]
    pub role: Role,
}
