//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ideabin_core::entities::{Comment, NewComment};
use ideabin_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(idea_id = comment.idea_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (idea_id, author_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, idea_id, author_id, content, created_at
            ",
        )
        .bind(comment.idea_id)
        .bind(comment.author_id)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn list_by_idea(&self, idea_id: i64) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, idea_id, author_id, content, created_at
            FROM comments
            WHERE idea_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(idea_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, idea_ids))]
    async fn count_by_ideas(&self, idea_ids: &[i64]) -> RepoResult<Vec<(i64, i64)>> {
        if idea_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT idea_id, COUNT(*)
            FROM comments
            WHERE idea_id = ANY($1)
            GROUP BY idea_id
            ",
        )
        .bind(idea_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }
}
