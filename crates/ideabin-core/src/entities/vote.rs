//! Vote entity

/// A single vote on an idea. At most one vote exists per
/// `(idea_id, author_id)` pair; the store enforces this with a unique
/// constraint so concurrent double-votes cannot produce duplicate rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote {
    pub id: i64,
    pub idea_id: i64,
    pub author_id: i64,
}
