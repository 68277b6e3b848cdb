//! Vote database model

use sqlx::FromRow;

use ideabin_core::Vote;

/// Database model for the votes table. Backed by a
/// `UNIQUE (idea_id, author_id)` constraint.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub idea_id: i64,
    pub author_id: i64,
}

impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            id: model.id,
            idea_id: model.idea_id,
            author_id: model.author_id,
        }
    }
}
