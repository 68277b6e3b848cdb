//! Admin account handlers
//!
//! Account listing, inspection, and removal. Authorization is enforced in
//! the service layer through the policy.

use axum::extract::{Path, State};
use axum::Json;
use ideabin_service::dto::AccountResponse;
use ideabin_service::AccountService;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List every account
///
/// GET /admin/accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.list_accounts(&auth.identity).await?;
    Ok(Json(response))
}

/// Get a single account by id
///
/// GET /admin/accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(account_id): Path<i64>,
) -> ApiResult<Json<AccountResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.get_account(&auth.identity, account_id).await?;
    Ok(Json(response))
}

/// Delete an account and everything it owns
///
/// DELETE /admin/accounts/{id}
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(account_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = AccountService::new(state.service_context());
    service.delete_account(&auth.identity, account_id).await?;
    Ok(NoContent)
}
