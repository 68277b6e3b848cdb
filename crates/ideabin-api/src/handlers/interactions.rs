//! Interaction handlers
//!
//! Voting and commenting endpoints.

use axum::extract::State;
use axum::Json;
use ideabin_service::dto::{CommentResponse, CreateCommentRequest, VoteRequest};
use ideabin_service::InteractionService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Cast a vote on an idea
///
/// POST /interact/vote
pub async fn vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<VoteRequest>,
) -> ApiResult<Created<()>> {
    let service = InteractionService::new(state.service_context());
    service.vote(&auth.identity, request).await?;
    Ok(Created(()))
}

/// Retract a vote from an idea
///
/// POST /interact/unvote
pub async fn unvote(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<VoteRequest>,
) -> ApiResult<NoContent> {
    let service = InteractionService::new(state.service_context());
    service.unvote(&auth.identity, request).await?;
    Ok(NoContent)
}

/// Post a comment on an idea
///
/// POST /interact/comment
pub async fn comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = InteractionService::new(state.service_context());
    let response = service.comment(&auth.identity, request).await?;
    Ok(Created(Json(response)))
}
