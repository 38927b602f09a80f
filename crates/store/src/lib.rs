//! Document store contract and the in-memory backend.
//!
//! Repositories talk to the hosted document database through the
//! [`DocumentStore`] trait: collections, subcollections, single-document
//! reads, filtered ordered queries with cursor pagination, and field
//! updates including atomic numeric increments. [`MemoryStore`] is a
//! process-local backend with the same contract, used by tests and local
//! development.

pub mod document;
pub mod error;
pub mod memory;
pub mod path;
pub mod query;
pub mod store;
pub mod update;

pub use document::{to_fields, DocumentRef, DocumentSnapshot, Fields};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use path::{CollectionPath, DocumentPath};
pub use query::{Cursor, Direction, Filter, OrderBy, Query};
pub use store::{DocumentStore, StoreHandle};
pub use update::{FieldUpdate, Updates};
