//! Interaction service
//!
//! Voting and commenting on ideas. The idea must exist at the time of the
//! interaction; the vote uniqueness invariant is enforced by the store's
//! constraint, so a concurrent double-vote still yields a conflict.

use ideabin_core::policy::{authorize, Action};
use ideabin_core::{Identity, NewComment};
use tracing::{info, instrument};

use crate::dto::requests::{CreateCommentRequest, VoteRequest};
use crate::dto::CommentResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Interaction service
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    /// Create a new InteractionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast a vote on an idea
    #[instrument(skip(self, identity), fields(caller = identity.id, idea_id = request.idea_id))]
    pub async fn vote(&self, identity: &Identity, request: VoteRequest) -> ServiceResult<()> {
        authorize(identity, &Action::Vote)?;
        self.require_idea(request.idea_id).await?;

        self.ctx
            .vote_repo()
            .create(request.idea_id, identity.id)
            .await?;

        info!(idea_id = request.idea_id, "Vote cast");
        Ok(())
    }

    /// Retract the caller's vote from an idea
    #[instrument(skip(self, identity), fields(caller = identity.id, idea_id = request.idea_id))]
    pub async fn unvote(&self, identity: &Identity, request: VoteRequest) -> ServiceResult<()> {
        authorize(identity, &Action::Vote)?;
        self.require_idea(request.idea_id).await?;

        self.ctx
            .vote_repo()
            .delete(request.idea_id, identity.id)
            .await?;

        info!(idea_id = request.idea_id, "Vote retracted");
        Ok(())
    }

    /// Post a comment on an idea
    #[instrument(skip(self, identity, request), fields(caller = identity.id, idea_id = request.idea_id))]
    pub async fn comment(
        &self,
        identity: &Identity,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        authorize(identity, &Action::Comment)?;
        self.require_idea(request.idea_id).await?;

        let author = self
            .ctx
            .account_repo()
            .find_by_id(identity.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", identity.id.to_string()))?;

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                idea_id: request.idea_id,
                author_id: identity.id,
                content: request.content,
            })
            .await?;

        info!(comment_id = comment.id, idea_id = comment.idea_id, "Comment posted");

        Ok(CommentResponse {
            id: comment.id,
            idea_id: comment.idea_id,
            content: comment.content,
            author: author.author_projection(),
            created_at: comment.created_at,
        })
    }

    async fn require_idea(&self, idea_id: i64) -> ServiceResult<()> {
        if self.ctx.idea_repo().exists(idea_id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Idea", idea_id.to_string()))
        }
    }
}
