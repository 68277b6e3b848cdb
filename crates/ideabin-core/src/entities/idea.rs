//! Idea entity - a user-authored post

use chrono::{DateTime, Utc};

/// Idea entity. The author is required and immutable after creation;
/// deleting an idea cascades to its votes and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create an idea
#[derive(Debug, Clone)]
pub struct NewIdea {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub author_id: i64,
}
