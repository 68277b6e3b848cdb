//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request. Registration always produces a regular
/// account; privileged roles are never assignable through this path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 64, message = "Username must be 2-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Password change request for the authenticated account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub password: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub new_password: String,
}

// ============================================================================
// Superuser Requests
// ============================================================================

/// Create an admin account (superuser only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(length(min = 2, max = 64, message = "Username must be 2-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,
}

// ============================================================================
// Idea Requests
// ============================================================================

/// Post a new idea
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIdeaRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Subtitle must be 1-255 characters"))]
    pub subtitle: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

// ============================================================================
// Interaction Requests
// ============================================================================

/// Cast or retract a vote on an idea
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VoteRequest {
    pub idea_id: i64,
}

/// Post a comment on an idea
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub idea_id: i64,

    #[validate(length(min = 10, message = "Comment must be at least 10 characters"))]
    pub content: String,
}
