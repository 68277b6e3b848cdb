//! Authentication service
//!
//! Handles registration, login, the account self-view, and password changes.

use ideabin_common::auth::{hash_password, verify_password};
use ideabin_common::AppError;
use ideabin_core::{Identity, NewAccount, Role};
use tracing::{info, instrument, warn};

use crate::dto::{
    account_to_response, AccountResponse, ChangePasswordRequest, LoginRequest, RegisterRequest,
    TokenResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account. Always creates a regular account; the
    /// superuser path is the only way to create admins.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AccountResponse> {
        // Fail fast before hashing; the unique constraints remain
        // authoritative if a concurrent registration races past this check
        if self
            .ctx
            .account_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ideabin_core::DomainError::UsernameTaken.into());
        }
        if self.ctx.account_repo().email_exists(&request.email).await? {
            return Err(ideabin_core::DomainError::EmailTaken.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_account = NewAccount {
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password_hash,
            role: Role::User,
        };

        let account = self.ctx.account_repo().create(&new_account).await?;
        info!(account_id = account.id, "Account registered");

        Ok(account_to_response(&account))
    }

    /// Login with username and password, issuing a bearer token
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: unknown username");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .account_repo()
            .get_password_hash(account.id)
            .await?
            .ok_or_else(|| {
                warn!(account_id = account.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash) {
            warn!(account_id = account.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self
            .ctx
            .token_service()
            .issue(&account)
            .map_err(ServiceError::App)?;

        info!(account_id = account.id, "Account logged in");

        Ok(TokenResponse::new(
            token,
            self.ctx.token_service().ttl_seconds(),
        ))
    }

    /// Full account view for the authenticated caller
    #[instrument(skip(self, identity), fields(account_id = identity.id))]
    pub async fn account_info(&self, identity: &Identity) -> ServiceResult<AccountResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_id(identity.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", identity.id.to_string()))?;

        Ok(account_to_response(&account))
    }

    /// Change the caller's password after verifying the current one.
    ///
    /// Tokens already issued stay valid until they expire; expiry is the only
    /// cancellation mechanism for stateless tokens.
    #[instrument(skip(self, identity, request), fields(account_id = identity.id))]
    pub async fn change_password(
        &self,
        identity: &Identity,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let current_hash = self
            .ctx
            .account_repo()
            .get_password_hash(identity.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", identity.id.to_string()))?;

        if !verify_password(&request.password, &current_hash) {
            warn!(account_id = identity.id, "Password change failed: wrong current password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .account_repo()
            .update_password(identity.id, &new_hash)
            .await?;

        info!(account_id = identity.id, "Password changed");
        Ok(())
    }
}
