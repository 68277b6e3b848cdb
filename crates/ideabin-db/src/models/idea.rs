//! Idea database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use ideabin_core::Idea;

/// Database model for the ideas table
#[derive(Debug, Clone, FromRow)]
pub struct IdeaModel {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<IdeaModel> for Idea {
    fn from(model: IdeaModel) -> Self {
        Idea {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            content: model.content,
            author_id: model.author_id,
            created_at: model.created_at,
        }
    }
}
