//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    #[error("Idea not found: {0}")]
    IdeaNotFound(i64),

    #[error("Vote not found for this idea by this account")]
    VoteNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Comment too short: minimum {min} characters")]
    CommentTooShort { min: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the author of this idea")]
    NotIdeaAuthor,

    #[error("Admin role required")]
    AdminRequired,

    #[error("Superuser role required")]
    SuperRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Already voted on this idea")]
    AlreadyVoted,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::IdeaNotFound(_) => "UNKNOWN_IDEA",
            Self::VoteNotFound => "UNKNOWN_VOTE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::CommentTooShort { .. } => "COMMENT_TOO_SHORT",

            // Authorization
            Self::NotIdeaAuthor => "NOT_IDEA_AUTHOR",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::SuperRequired => "SUPER_REQUIRED",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::AlreadyVoted => "ALREADY_VOTED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_) | Self::IdeaNotFound(_) | Self::VoteNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::CommentTooShort { .. })
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotIdeaAuthor | Self::AdminRequired | Self::SuperRequired
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken | Self::EmailTaken | Self::AlreadyVoted
        )
    }
}
