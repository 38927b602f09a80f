//! User access levels.

use serde::{Deserialize, Serialize};

/// Access level attached to a user document.
///
/// `Admin` gates privileged actions (posting quests, finalizing proposals)
/// at the presentation layer. Nothing in the data layer enforces it, and
/// user documents written before roles existed decode as `User`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Return the role name as stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
