//! Quest board event bus.
//!
//! Building blocks for in-process notifications:
//!
//! - [`EventBus`] — publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`BoardEvent`] — the domain event envelope, with a typed
//!   [`EventSource`] naming the entity an event is about.
//! - [`names`] — well-known event name constants.
//!
//! Repositories publish an event after the last write of an operation
//! completes; the presentation layer subscribes to drive notifications.

pub mod bus;
pub mod event;
pub mod names;

pub use bus::EventBus;
pub use event::{BoardEvent, EntityKind, EventSource};
