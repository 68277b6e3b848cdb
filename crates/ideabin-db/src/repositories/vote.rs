//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ideabin_core::entities::Vote;
use ideabin_core::error::DomainError;
use ideabin_core::traits::{RepoResult, VoteRepository};

use crate::models::VoteModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn create(&self, idea_id: i64, author_id: i64) -> RepoResult<Vote> {
        // The UNIQUE (idea_id, author_id) constraint resolves concurrent
        // casts: exactly one insert succeeds, the loser gets AlreadyVoted.
        let model = sqlx::query_as::<_, VoteModel>(
            r"
            INSERT INTO votes (idea_id, author_id)
            VALUES ($1, $2)
            RETURNING id, idea_id, author_id
            ",
        )
        .bind(idea_id)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::AlreadyVoted))?;

        Ok(Vote::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, idea_id: i64, author_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM votes WHERE idea_id = $1 AND author_id = $2
            ",
        )
        .bind(idea_id)
        .bind(author_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::VoteNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self, idea_ids))]
    async fn count_by_ideas(&self, idea_ids: &[i64]) -> RepoResult<Vec<(i64, i64)>> {
        if idea_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT idea_id, COUNT(*)
            FROM votes
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

    #[instrument(skip(self, idea_ids))]
    async fn voted_idea_ids(&self, author_id: i64, idea_ids: &[i64]) -> RepoResult<Vec<i64>> {
        if idea_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT idea_id
            FROM votes
            WHERE author_id = $1 AND idea_id = ANY($2)
            ",
        )
        .bind(author_id)
        .bind(idea_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }
}
