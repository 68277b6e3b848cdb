//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, authorization, and orchestration of domain operations.

pub mod account;
pub mod auth;
pub mod context;
pub mod error;
pub mod feed;
pub mod idea;
pub mod interaction;
pub mod validation;

// Re-export all services for convenience
pub use account::AccountService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use idea::IdeaService;
pub use interaction::InteractionService;
pub use validation::ValidationService;
