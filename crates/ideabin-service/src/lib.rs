//! # ideabin-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccountService, AuthService, FeedService, IdeaService, InteractionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ValidationService,
};
