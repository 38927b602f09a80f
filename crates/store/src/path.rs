//! Typed collection and document paths.
//!
//! Paths alternate collection and document segments the way the hosted
//! store addresses them: `proposals/abc123/signatures` is the signature
//! subcollection of proposal `abc123`.

use questboard_core::DocId;

/// Path to a top-level collection or a subcollection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath(String);

impl CollectionPath {
    /// Root-level collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Address a document inside this collection.
    pub fn doc(&self, id: impl Into<DocId>) -> DocumentPath {
        DocumentPath {
            collection: self.clone(),
            id: id.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path to a single document: its collection plus its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    collection: CollectionPath,
    id: DocId,
}

impl DocumentPath {
    /// Collection holding this document.
    pub fn collection(&self) -> &CollectionPath {
        &self.collection
    }

    /// Id of the document (final path segment).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Address a subcollection under this document.
    pub fn subcollection(&self, name: &str) -> CollectionPath {
        CollectionPath(format!("{}/{}/{}", self.collection.0, self.id, name))
    }
}

impl std::fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection.0, self.id)
    }
}
