//! PostgreSQL implementation of IdeaRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ideabin_core::entities::{Idea, NewIdea};
use ideabin_core::traits::{IdeaRepository, RepoResult};

use crate::models::IdeaModel;

use super::error::{idea_not_found, map_db_error};

/// PostgreSQL implementation of IdeaRepository
#[derive(Clone)]
pub struct PgIdeaRepository {
    pool: PgPool,
}

impl PgIdeaRepository {
    /// Create a new PgIdeaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdeaRepository for PgIdeaRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Idea>> {
        let result = sqlx::query_as::<_, IdeaModel>(
            r"
            SELECT id, title, subtitle, content, author_id, created_at
            FROM ideas
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Idea::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Idea>> {
        let results = sqlx::query_as::<_, IdeaModel>(
            r"
            SELECT id, title, subtitle, content, author_id, created_at
            FROM ideas
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Idea::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM ideas WHERE id = $1)
            ",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, idea), fields(author_id = idea.author_id))]
    async fn create(&self, idea: &NewIdea) -> RepoResult<Idea> {
        let model = sqlx::query_as::<_, IdeaModel>(
            r"
            INSERT INTO ideas (title, subtitle, content, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, subtitle, content, author_id, created_at
            ",
        )
        .bind(&idea.title)
        .bind(&idea.subtitle)
        .bind(&idea.content)
        .bind(idea.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Idea::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Votes, comments, and the idea are removed in one transaction.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM votes WHERE idea_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM comments WHERE idea_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(idea_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}
