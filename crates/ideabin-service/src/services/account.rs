//! Account administration service
//!
//! Admin-tier account listing and removal, and the superuser-tier management
//! of admin accounts. Every entry point goes through the authorization
//! policy before touching the store.

use ideabin_common::auth::hash_password;
use ideabin_core::policy::{authorize, Action};
use ideabin_core::{Identity, NewAccount, Role};
use tracing::{info, instrument};

use crate::dto::{account_to_response, AccountResponse, CreateAdminRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account administration service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every account (admin)
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn list_accounts(&self, identity: &Identity) -> ServiceResult<Vec<AccountResponse>> {
        authorize(identity, &Action::ListAccounts)?;

        let accounts = self.ctx.account_repo().list_all().await?;
        Ok(accounts.iter().map(account_to_response).collect())
    }

    /// Fetch a single account by id (admin)
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn get_account(
        &self,
        identity: &Identity,
        account_id: i64,
    ) -> ServiceResult<AccountResponse> {
        authorize(identity, &Action::GetAccount)?;

        let account = self
            .ctx
            .account_repo()
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", account_id.to_string()))?;

        Ok(account_to_response(&account))
    }

    /// Delete an account and everything it owns (admin)
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn delete_account(&self, identity: &Identity, account_id: i64) -> ServiceResult<()> {
        authorize(identity, &Action::DeleteAccount)?;

        self.ctx.account_repo().delete(account_id).await?;
        info!(account_id, "Account deleted");
        Ok(())
    }

    /// List admin accounts (superuser)
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn list_admins(&self, identity: &Identity) -> ServiceResult<Vec<AccountResponse>> {
        authorize(identity, &Action::ManageAdmins)?;

        let admins = self.ctx.account_repo().list_by_role(Role::Admin).await?;
        Ok(admins.iter().map(account_to_response).collect())
    }

    /// Create an admin account (superuser)
    #[instrument(skip(self, identity, request), fields(caller = identity.id, username = %request.username))]
    pub async fn create_admin(
        &self,
        identity: &Identity,
        request: CreateAdminRequest,
    ) -> ServiceResult<AccountResponse> {
        authorize(identity, &Action::ManageAdmins)?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_account = NewAccount {
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password_hash,
            role: Role::Admin,
        };

        let account = self.ctx.account_repo().create(&new_account).await?;
        info!(account_id = account.id, "Admin account created");

        Ok(account_to_response(&account))
    }

    /// Delete an admin account (superuser). Refuses ids that do not hold the
    /// admin role so this path cannot remove regular or super accounts.
    #[instrument(skip(self, identity), fields(caller = identity.id))]
    pub async fn delete_admin(&self, identity: &Identity, account_id: i64) -> ServiceResult<()> {
        authorize(identity, &Action::ManageAdmins)?;

        let account = self
            .ctx
            .account_repo()
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Admin", account_id.to_string()))?;

        if account.role != Role::Admin {
            return Err(ServiceError::not_found("Admin", account_id.to_string()));
        }

        self.ctx.account_repo().delete(account_id).await?;
        info!(account_id, "Admin account deleted");
        Ok(())
    }
}
