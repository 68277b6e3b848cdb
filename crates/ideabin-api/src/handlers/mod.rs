//! HTTP request handlers organized by domain

pub mod accounts;
pub mod auth;
pub mod health;
pub mod ideas;
pub mod interactions;
pub mod superuser;
pub mod validation;
