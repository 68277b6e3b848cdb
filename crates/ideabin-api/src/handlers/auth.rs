//! Authentication handlers
//!
//! Endpoints for registration, login, the account self-view, and password
//! changes.

use axum::{extract::State, Json};
use ideabin_service::dto::{
    AccountResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, TokenResponse,
};
use ideabin_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new account
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AccountResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Get the authenticated account's details
///
/// GET /auth/account
pub async fn account_info(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AccountResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.account_info(&auth.identity).await?;
    Ok(Json(response))
}

/// Change the authenticated account's password
///
/// PUT /auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.change_password(&auth.identity, request).await?;
    Ok(NoContent)
}
