//! Account entity, roles, and the resolved request identity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role tier.
///
/// A closed enum with a total order: `User < Admin < Super`. `Super` accounts
/// are provisioned out of band and manage admin accounts; they are never
/// created through the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Super,
}

impl Role {
    /// Stable string form used for storage and token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Super => "super",
        }
    }

    /// Check if this role carries administrative rights
    #[inline]
    pub fn is_admin(&self) -> bool {
        *self >= Self::Admin
    }

    /// Check if this role may manage admin accounts
    #[inline]
    pub fn is_super(&self) -> bool {
        *self == Self::Super
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "super" => Ok(Self::Super),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Account entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Author projection embedded in feed and comment views
    pub fn author_projection(&self) -> AuthorProjection {
        AuthorProjection {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    /// Identity asserted by a token issued for this account
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// Fields required to create an account. The id and creation time are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// The authenticated caller resolved for the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Embedded author view: the subset of account fields exposed on feed items
/// and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorProjection {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}
