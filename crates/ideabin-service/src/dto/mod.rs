//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ChangePasswordRequest, CreateAdminRequest, CreateCommentRequest, CreateIdeaRequest,
    LoginRequest, RegisterRequest, VoteRequest,
};

// Re-export commonly used response types
pub use responses::{
    AccountResponse, AvailabilityResponse, CommentResponse, FeedItemResponse, HealthResponse,
    TokenResponse,
};

// Re-export mapper helpers
pub use mappers::{account_to_response, assemble_comments, assemble_feed};
