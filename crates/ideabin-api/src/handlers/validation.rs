//! Uniqueness validation handlers
//!
//! Public availability checks for usernames and emails.

use axum::extract::{Path, State};
use axum::Json;
use ideabin_service::dto::AvailabilityResponse;
use ideabin_service::ValidationService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Check whether a username is taken
///
/// GET /validation/username/{username}
pub async fn check_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let service = ValidationService::new(state.service_context());
    let response = service.check_username(&username).await?;
    Ok(Json(response))
}

/// Check whether an email is registered
///
/// GET /validation/email/{email}
pub async fn check_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let service = ValidationService::new(state.service_context());
    let response = service.check_email(&email).await?;
    Ok(Json(response))
}
