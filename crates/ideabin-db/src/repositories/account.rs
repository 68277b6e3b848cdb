//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ideabin_core::entities::{Account, NewAccount, Role};
use ideabin_core::error::DomainError;
use ideabin_core::traits::{AccountRepository, RepoResult};

use crate::models::AccountModel;

use super::error::{account_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique violation on the accounts table to its domain conflict.
///
/// Only the two known constraints are translated; anything else surfaces as
/// a database error rather than being mislabeled as an email conflict.
fn map_account_unique(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(name) if name.contains("username") => DomainError::UsernameTaken,
        Some(name) if name.contains("email") => DomainError::EmailTaken,
        other => DomainError::DatabaseError(format!(
            "Unexpected unique violation on accounts: {}",
            other.unwrap_or("<unnamed constraint>")
        )),
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, username, first_name, last_name, email, role, created_at
            FROM accounts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Account::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, username, first_name, last_name, email, role, created_at
            FROM accounts
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Account::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<Account>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, username, first_name, last_name, email, role, created_at
            FROM accounts
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Account::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Account>> {
        let results = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, username, first_name, last_name, email, role, created_at
            FROM accounts
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Account::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_by_role(&self, role: Role) -> RepoResult<Vec<Account>> {
        let results = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, username, first_name, last_name, email, role, created_at
            FROM accounts
            WHERE role = $1
            ORDER BY id
            ",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Account::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, account), fields(username = %account.username))]
    async fn create(&self, account: &NewAccount) -> RepoResult<Account> {
        let model = sqlx::query_as::<_, AccountModel>(
            r"
            INSERT INTO accounts (username, first_name, last_name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, first_name, last_name, email, role, created_at
            ",
        )
        .bind(&account.username)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, map_account_unique)
        })?;

        Account::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // All dependent rows and the account itself go in one transaction;
        // a partial cascade is never visible. The transaction rolls back on
        // drop if any statement fails.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM votes
            WHERE author_id = $1
               OR idea_id IN (SELECT id FROM ideas WHERE author_id = $1)
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM comments
            WHERE author_id = $1
               OR idea_id IN (SELECT id FROM ideas WHERE author_id = $1)
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM ideas WHERE author_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(account_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM accounts WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE accounts SET password_hash = $2 WHERE id = $1
            ",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(account_not_found(id));
        }

        Ok(())
    }
}
