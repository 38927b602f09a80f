//! Query construction for collection reads.

use serde_json::Value;

/// Opaque pagination token referencing the last document of a page.
///
/// Obtained from [`crate::DocumentSnapshot::cursor`] and only meaningful
/// against the same collection, filters, and ordering it was issued
/// under. Reusing a cursor after the filter set changes yields
/// unspecified results; callers restart from the first page instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    pub(crate) fn at(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Id of the document this cursor points at.
    pub fn doc_id(&self) -> &str {
        &self.0
    }
}

/// Field filter applied before ordering and pagination.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Field equals the given value.
    Eq { field: String, value: Value },
    /// Field equals any of the given values.
    In { field: String, values: Vec<Value> },
}

/// Sort direction for an ordering clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordering clause for a query.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// Declarative read over one collection.
///
/// Without an ordering clause the store's default document order
/// applies. The in-memory backend uses insertion order; hosted backends
/// make no such promise, so callers must not rely on any particular
/// default.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
    pub start_after: Option<Cursor>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only documents whose `field` equals `value`.
    pub fn filter_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    /// Keep only documents whose `field` equals one of `values`.
    pub fn filter_in(mut self, field: &str, values: Vec<Value>) -> Self {
        self.filters.push(Filter::In {
            field: field.to_string(),
            values,
        });
        self
    }

    /// Sort by `field` before the limit is applied.
    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            direction,
        });
        self
    }

    /// Return at most `limit` documents.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Position the result window strictly after the cursor's document.
    pub fn start_after(mut self, cursor: Cursor) -> Self {
        self.start_after = Some(cursor);
        self
    }
}
