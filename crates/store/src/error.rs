/// Errors surfaced by document store backends.
///
/// A read that finds nothing is not an error: single-document lookups
/// return a snapshot whose `exists()` is false and queries return fewer
/// rows. `NotFound` is reserved for updates addressed at a document that
/// is not there.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An update addressed a document that does not exist.
    #[error("Document not found: {path}")]
    NotFound { path: String },

    /// A document body failed to encode or decode.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// The backend rejected or failed the call.
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
