//! In-process fan-out of board events.

use tokio::sync::broadcast;

use crate::event::BoardEvent;

/// How far a slow subscriber can fall behind before it starts losing
/// the oldest events.
const CHANNEL_CAPACITY: usize = 1024;

/// Hands out receivers and forwards every published [`BoardEvent`] to
/// all of them.
///
/// Repositories hold the bus behind an `Arc` and publish once an
/// operation's last write has committed; the presentation layer
/// subscribes to drive notifications. Publishing never blocks.
pub struct EventBus {
    sender: broadcast::Sender<BoardEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Deliver `event` to every live subscriber.
    ///
    /// An event published while nobody is subscribed goes nowhere.
    pub fn publish(&self, event: BoardEvent) {
        let _ = self.sender.send(event);
    }

    /// Open a receiver that sees every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(CHANNEL_CAPACITY)
    }
}
