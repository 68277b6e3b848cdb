//! Idea service
//!
//! Creation and deletion of ideas. Reads live in the feed service so every
//! list and detail view is enriched the same way.

use ideabin_core::policy::{authorize, Action};
use ideabin_core::{Identity, NewIdea};
use tracing::{info, instrument};

use crate::dto::FeedItemResponse;
use crate::dto::requests::CreateIdeaRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Idea service
pub struct IdeaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdeaService<'a> {
    /// Create a new IdeaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a new idea authored by the caller
    #[instrument(skip(self, identity, request), fields(author_id = identity.id))]
    pub async fn create_idea(
        &self,
        identity: &Identity,
        request: CreateIdeaRequest,
    ) -> ServiceResult<FeedItemResponse> {
        authorize(identity, &Action::CreateIdea)?;

        let author = self
            .ctx
            .account_repo()
            .find_by_id(identity.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", identity.id.to_string()))?;

        let new_idea = NewIdea {
            title: request.title,
            subtitle: request.subtitle,
            content: request.content,
            author_id: identity.id,
        };

        let idea = self.ctx.idea_repo().create(&new_idea).await?;
        info!(idea_id = idea.id, "Idea created");

        // A fresh idea has no votes or comments yet
        Ok(FeedItemResponse {
            id: idea.id,
            title: idea.title,
            subtitle: idea.subtitle,
            content: idea.content,
            author: author.author_projection(),
            vote_count: 0,
            comment_count: 0,
            own_vote: false,
            created_at: idea.created_at,
        })
    }

    /// Delete an idea. Allowed for the idea's author and for admins; the
    /// cascade removes its votes and comments in the same transaction.
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn delete_idea(&self, identity: &Identity, idea_id: i64) -> ServiceResult<()> {
        let idea = self
            .ctx
            .idea_repo()
            .find_by_id(idea_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Idea", idea_id.to_string()))?;

        authorize(
            identity,
            &Action::DeleteIdea {
                author_id: idea.author_id,
            },
        )?;

        self.ctx.idea_repo().delete(idea_id).await?;
        info!(idea_id, "Idea deleted");
        Ok(())
    }
}
