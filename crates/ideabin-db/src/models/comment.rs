//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use ideabin_core::Comment;

/// Database model for the comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub idea_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            idea_id: model.idea_id,
            author_id: model.author_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
