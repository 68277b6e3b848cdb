//! Idea handlers
//!
//! Feed listing, idea detail, creation, deletion, and the comment listing.

use axum::extract::{Path, State};
use axum::Json;
use ideabin_service::dto::{CommentResponse, CreateIdeaRequest, FeedItemResponse};
use ideabin_service::{FeedService, IdeaService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// The enriched feed of every idea
///
/// GET /ideas
pub async fn list_ideas(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FeedItemResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.list_feed(&auth.identity).await?;
    Ok(Json(response))
}

/// A single idea, enriched like a feed entry
///
/// GET /ideas/{id}
pub async fn get_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<i64>,
) -> ApiResult<Json<FeedItemResponse>> {
    let service = FeedService::new(state.service_context());
    let response = service.get_idea(&auth.identity, idea_id).await?;
    Ok(Json(response))
}

/// Post a new idea
///
/// POST /ideas
pub async fn create_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateIdeaRequest>,
) -> ApiResult<Created<Json<FeedItemResponse>>> {
    let service = IdeaService::new(state.service_context());
    let response = service.create_idea(&auth.identity, request).await?;
    Ok(Created(Json(response)))
}

/// Delete an idea (author or admin)
///
/// DELETE /ideas/{id}
pub async fn delete_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = IdeaService::new(state.service_context());
    service.delete_idea(&auth.identity, idea_id).await?;
    Ok(NoContent)
}

/// Comments on an idea, oldest first
///
/// GET /ideas/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<i64>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.list_comments(&auth.identity, idea_id).await?;
    Ok(Json(response))
}
