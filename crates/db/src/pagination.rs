//! Shared cursor pagination helper.
//!
//! One page request carries an optional cursor (the last snapshot of the
//! previous page) and a maximum page size. The store positions the
//! window strictly after the cursor under the active ordering and
//! filters. End-of-results is signaled only by a short page; there is no
//! explicit flag. Cursors are bound to the filter that produced them, so
//! callers restart from the first page whenever the filter changes.

use questboard_store::{CollectionPath, Cursor, DocumentSnapshot, Query, StoreError, StoreHandle};

/// Largest page a single request may ask for.
pub const MAX_PAGE_SIZE: usize = 100;

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(page_size: usize) -> usize {
    page_size.max(1).min(MAX_PAGE_SIZE)
}

/// True when a page of `returned` items signals end-of-results for a
/// request of `requested` items.
pub fn is_last_page(returned: usize, requested: usize) -> bool {
    returned < clamp_page_size(requested)
}

/// Fetch one page of `collection`, strictly after `cursor` when given.
///
/// `base` carries the caller's filters and ordering; the limit and
/// cursor are applied here so every repository clamps identically.
pub async fn fetch_page(
    store: &StoreHandle,
    collection: &CollectionPath,
    base: Query,
    cursor: Option<Cursor>,
    page_size: usize,
) -> Result<Vec<DocumentSnapshot>, StoreError> {
    let mut query = base.limit(clamp_page_size(page_size));
    if let Some(cursor) = cursor {
        query = query.start_after(cursor);
    }
    store.run_query(collection, query).await
}
