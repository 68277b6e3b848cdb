//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use ideabin_core::AuthorProjection;
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Bearer token issued on successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

// ============================================================================
// Account Responses
// ============================================================================

/// Full account view, returned to the account holder and to admins
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Validation Responses
// ============================================================================

/// Availability check result for a username or email
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub status: &'static str,
}

impl AvailabilityResponse {
    pub fn from_exists(exists: bool) -> Self {
        Self {
            status: if exists { "exist" } else { "not exist" },
        }
    }
}

// ============================================================================
// Feed Responses
// ============================================================================

/// An idea enriched with aggregate counts and the requester's vote flag
#[derive(Debug, Clone, Serialize)]
pub struct FeedItemResponse {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub author: AuthorProjection,
    pub vote_count: i64,
    pub comment_count: i64,
    pub own_vote: bool,
    pub created_at: DateTime<Utc>,
}

/// A comment with its author embedded
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub idea_id: i64,
    pub content: String,
    pub author: AuthorProjection,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
