//! Feed aggregation service
//!
//! Enriches ideas with vote counts, comment counts, the requester's own-vote
//! flag, and author projections. All related facts are batch-loaded per
//! request and joined in memory, never one query per idea.

use std::collections::HashSet;

use ideabin_core::policy::{authorize, Action};
use ideabin_core::{Idea, Identity};
use tracing::instrument;

use crate::dto::{assemble_comments, assemble_feed, CommentResponse, FeedItemResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Feed aggregation service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The full feed in insertion order, enriched for the caller
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn list_feed(&self, identity: &Identity) -> ServiceResult<Vec<FeedItemResponse>> {
        authorize(identity, &Action::ReadFeed)?;

        let ideas = self.ctx.idea_repo().list_all().await?;
        self.enrich(identity, ideas).await
    }

    /// A single idea, enriched the same way as a feed entry
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn get_idea(
        &self,
        identity: &Identity,
        idea_id: i64,
    ) -> ServiceResult<FeedItemResponse> {
        authorize(identity, &Action::ReadFeed)?;

        let idea = self
            .ctx
            .idea_repo()
            .find_by_id(idea_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Idea", idea_id.to_string()))?;

        self.enrich(identity, vec![idea])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::not_found("Idea", idea_id.to_string()))
    }

    /// Comments on an idea, creation time ascending, authors embedded
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn list_comments(
        &self,
        identity: &Identity,
        idea_id: i64,
    ) -> ServiceResult<Vec<CommentResponse>> {
        authorize(identity, &Action::ReadFeed)?;

        if !self.ctx.idea_repo().exists(idea_id).await? {
            return Err(ServiceError::not_found("Idea", idea_id.to_string()));
        }

        let comments = self.ctx.comment_repo().list_by_idea(idea_id).await?;

        let author_ids: Vec<i64> = comments
            .iter()
            .map(|c| c.author_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let authors = self.ctx.account_repo().find_by_ids(&author_ids).await?;

        Ok(assemble_comments(comments, &authors))
    }

    /// Batch-load the related facts for a set of ideas and join them
    async fn enrich(
        &self,
        identity: &Identity,
        ideas: Vec<Idea>,
    ) -> ServiceResult<Vec<FeedItemResponse>> {
        if ideas.is_empty() {
            return Ok(Vec::new());
        }

        let idea_ids: Vec<i64> = ideas.iter().map(|i| i.id).collect();
        let author_ids: Vec<i64> = ideas
            .iter()
            .map(|i| i.author_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let vote_counts = self.ctx.vote_repo().count_by_ideas(&idea_ids).await?;
        let comment_counts = self.ctx.comment_repo().count_by_ideas(&idea_ids).await?;
        let voted = self
            .ctx
            .vote_repo()
            .voted_idea_ids(identity.id, &idea_ids)
            .await?;
        let authors = self.ctx.account_repo().find_by_ids(&author_ids).await?;

        Ok(assemble_feed(
            ideas,
            &authors,
            &vote_counts,
            &comment_counts,
            &voted,
        ))
    }
}
