//! Superuser handlers
//!
//! Management of admin accounts, available only to super accounts.

use axum::extract::{Path, State};
use axum::Json;
use ideabin_service::dto::{AccountResponse, CreateAdminRequest};
use ideabin_service::AccountService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List admin accounts
///
/// GET /superuser/admins
pub async fn list_admins(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.list_admins(&auth.identity).await?;
    Ok(Json(response))
}

/// Create an admin account
///
/// POST /superuser/admins
pub async fn create_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateAdminRequest>,
) -> ApiResult<Created<Json<AccountResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.create_admin(&auth.identity, request).await?;
    Ok(Created(Json(response)))
}

/// Delete an admin account
///
/// DELETE /superuser/admins/{id}
pub async fn delete_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(account_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = AccountService::new(state.service_context());
    service.delete_admin(&auth.identity, account_id).await?;
    Ok(NoContent)
}
