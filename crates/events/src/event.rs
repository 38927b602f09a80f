//! The board's domain event envelope.

use questboard_core::{DocId, Timestamp};
use serde::{Deserialize, Serialize};

/// Kind of entity an event can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Proposal,
    Quest,
}

/// The entity a [`BoardEvent`] is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    pub kind: EntityKind,
    pub id: DocId,
}

/// One notification emitted after a repository operation's final write
/// commits.
///
/// The name in `event_type` comes from [`crate::names`]; everything
/// else is optional context. Subscribers that only route on the name
/// can ignore the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardEvent {
    /// Dot-separated `entity.action` name.
    pub event_type: String,
    /// Entity the event is about, when there is one.
    pub source: Option<EventSource>,
    /// Uid of the user whose action produced the event.
    pub actor_uid: Option<String>,
    /// Extra event-specific data.
    pub payload: serde_json::Value,
    /// When the event was built, UTC.
    pub emitted_at: Timestamp,
}

impl BoardEvent {
    /// Start an event carrying only its name.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            source: None,
            actor_uid: None,
            payload: serde_json::Value::Object(Default::default()),
            emitted_at: chrono::Utc::now(),
        }
    }

    /// Record which entity the event is about.
    pub fn with_source(mut self, kind: EntityKind, id: impl Into<DocId>) -> Self {
        self.source = Some(EventSource {
            kind,
            id: id.into(),
        });
        self
    }

    /// Record the acting user.
    pub fn with_actor(mut self, uid: impl Into<String>) -> Self {
        self.actor_uid = Some(uid.into());
        self
    }

    /// Attach event-specific data.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}
