//! Quest urgency levels and their board colors.

use serde::{Deserialize, Serialize};

/// How urgently a quest needs doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestUrgency {
    Low,
    Medium,
    High,
}

impl QuestUrgency {
    /// Return the urgency name as stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Badge color the board renders for this urgency.
    pub fn display_color(&self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "orange",
            Self::High => "red",
        }
    }
}

impl std::fmt::Display for QuestUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
