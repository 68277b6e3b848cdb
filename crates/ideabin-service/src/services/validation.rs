//! Uniqueness validation service
//!
//! Standalone availability checks for usernames and emails, exposed to the
//! registration flow and as public endpoints. Advisory only: the database
//! constraints stay authoritative under races.

use tracing::instrument;

use crate::dto::AvailabilityResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Uniqueness validation service
pub struct ValidationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ValidationService<'a> {
    /// Create a new ValidationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check whether a username is already taken
    #[instrument(skip(self))]
    pub async fn check_username(&self, username: &str) -> ServiceResult<AvailabilityResponse> {
        let exists = self.ctx.account_repo().username_exists(username).await?;
        Ok(AvailabilityResponse::from_exists(exists))
    }

    /// Check whether an email is already registered
    #[instrument(skip(self))]
    pub async fn check_email(&self, email: &str) -> ServiceResult<AvailabilityResponse> {
        let exists = self.ctx.account_repo().email_exists(email).await?;
        Ok(AvailabilityResponse::from_exists(exists))
    }
}
