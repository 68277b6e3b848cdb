//! Service context - dependency container for services
//!
//! Holds the repositories and token service every service needs.

use std::sync::Arc;

use ideabin_common::TokenService;
use ideabin_core::traits::{
    AccountRepository, CommentRepository, IdeaRepository, VoteRepository,
};

/// Service context containing all dependencies
///
/// The main dependency container passed to all services. It provides access
/// to the database repositories and the token service; everything is behind
/// an `Arc` so cloning the context is cheap.
#[derive(Clone)]
pub struct ServiceContext {
    account_repo: Arc<dyn AccountRepository>,
    idea_repo: Arc<dyn IdeaRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    token_service: Arc<TokenService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        idea_repo: Arc<dyn IdeaRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            account_repo,
            idea_repo,
            vote_repo,
            comment_repo,
            token_service,
        }
    }

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the idea repository
    pub fn idea_repo(&self) -> &dyn IdeaRepository {
        self.idea_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the token service
    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("token_service", &self.token_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    idea_repo: Option<Arc<dyn IdeaRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    token_service: Option<Arc<TokenService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn idea_repo(mut self, repo: Arc<dyn IdeaRepository>) -> Self {
        self.idea_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.account_repo
                .ok_or_else(|| ServiceError::validation("account_repo is required"))?,
            self.idea_repo
                .ok_or_else(|| ServiceError::validation("idea_repo is required"))?,
            self.vote_repo
                .ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.token_service
                .ok_or_else(|| ServiceError::validation("token_service is required"))?,
        ))
    }
}
