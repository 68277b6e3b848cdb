//! Account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use ideabin_core::{Account, DomainError, Role};

/// Database model for the accounts table. The password hash column is only
/// selected by the credential queries, never by this model.
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AccountModel> for Account {
    type Error = DomainError;

    fn try_from(model: AccountModel) -> Result<Self, Self::Error> {
        let role: Role = model
            .role
            .parse()
            .map_err(|_| DomainError::InternalError(format!("Unknown role in store: {}", model.role)))?;

        Ok(Account {
            id: model.id,
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            role,
            created_at: model.created_at,
        })
    }
}
