//! Comment entity

use chrono::{DateTime, Utc};

/// A comment on an idea. Removed only by cascade when its idea or author
/// account is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub idea_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to post a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub idea_id: i64,
    pub author_id: i64,
    pub content: String,
}
