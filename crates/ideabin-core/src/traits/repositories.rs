//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Batch lookups exist so the feed aggregator
//! can enrich a page of ideas without one query per related fact.

use async_trait::async_trait;

use crate::entities::{Account, Comment, Idea, NewAccount, NewComment, NewIdea, Role, Vote};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Account>>;

    /// Find account by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>>;

    /// Batch lookup by id set, for author projections
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<Account>>;

    /// List every account, in insertion order
    async fn list_all(&self) -> RepoResult<Vec<Account>>;

    /// List accounts holding a given role
    async fn list_by_role(&self, role: Role) -> RepoResult<Vec<Account>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new account; fails with a conflict error on a username or
    /// email uniqueness violation
    async fn create(&self, account: &NewAccount) -> RepoResult<Account>;

    /// Delete an account, cascading to its ideas (and their votes/comments),
    /// its votes, and its comments, atomically
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Replace the stored password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Idea Repository
// ============================================================================

#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Find idea by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Idea>>;

    /// List all ideas in insertion (id) order
    async fn list_all(&self) -> RepoResult<Vec<Idea>>;

    /// Check existence without loading the row
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Create a new idea
    async fn create(&self, idea: &NewIdea) -> RepoResult<Idea>;

    /// Delete an idea, cascading to its votes and comments atomically
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Cast a vote; fails with `AlreadyVoted` when a vote for the same
    /// `(idea_id, author_id)` pair exists - the store's unique constraint is
    /// authoritative under concurrency
    async fn create(&self, idea_id: i64, author_id: i64) -> RepoResult<Vote>;

    /// Retract a vote; fails with `VoteNotFound` when none exists
    async fn delete(&self, idea_id: i64, author_id: i64) -> RepoResult<()>;

    /// Vote counts grouped by idea id, for the given id set
    async fn count_by_ideas(&self, idea_ids: &[i64]) -> RepoResult<Vec<(i64, i64)>>;

    /// Subset of `idea_ids` the author has voted on
    async fn voted_idea_ids(&self, author_id: i64, idea_ids: &[i64]) -> RepoResult<Vec<i64>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Post a comment
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Comments for an idea, creation time ascending
    async fn list_by_idea(&self, idea_id: i64) -> RepoResult<Vec<Comment>>;

    /// Comment counts grouped by idea id, for the given id set
    async fn count_by_ideas(&self, idea_ids: &[i64]) -> RepoResult<Vec<(i64, i64)>>;
}
