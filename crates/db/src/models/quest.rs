//! Quest entity and its create draft.

use questboard_core::{QuestUrgency, Timestamp};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Full quest document from the `quests` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    #[serde(default = "super::schema_version_default")]
    pub schema_version: i64,
    pub title: String,
    pub details: String,
    pub urgency: QuestUrgency,
    /// Snapshot of the assignee, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<User>,
    pub created_at: Timestamp,
}

/// Content for a new quest. The creation timestamp is stamped by the
/// repository, not carried by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestDraft {
    pub title: String,
    pub details: String,
    pub urgency: QuestUrgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_decodes_without_assignee() {
        let quest: Quest = serde_json::from_str(
            r#"{
                "title": "Fix the fountain",
                "details": "Pump is jammed",
                "urgency": "high",
                "createdAt": "2026-04-01T12:00:00Z"
            }"#,
        )
        .expect("should decode");
        assert!(quest.assigned_to.is_none());
        assert_eq!(quest.urgency, QuestUrgency::High);
        assert_eq!(quest.schema_version, 1);
    }

    #[test]
    fn test_quest_serializes_camel_case() {
        let quest = Quest {
            schema_version: 1,
            title: "Fix the fountain".to_string(),
            details: "Pump is jammed".to_string(),
            urgency: QuestUrgency::Medium,
            assigned_to: None,
            created_at: "2026-04-01T12:00:00Z".parse().expect("should parse"),
        };
        let json = serde_json::to_value(&quest).expect("should serialize");
        assert_eq!(json["schemaVersion"], 1);
        assert_eq!(json["urgency"], "medium");
        assert!(json.get("assignedTo").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
