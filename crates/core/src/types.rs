/// Document ids are opaque strings assigned by the store on creation.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Schema version stamped on documents written by the current code.
///
/// Readers must tolerate documents written before versioning existed,
/// so every decoder treats a missing `schemaVersion` as version 1.
pub const SCHEMA_VERSION: i64 = 1;
