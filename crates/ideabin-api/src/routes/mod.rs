//! Route definitions
//!
//! All API routes organized by domain, mounted at the root.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{accounts, auth, health, ideas, interactions, superuser, validation};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(validation_routes())
        .merge(admin_routes())
        .merge(superuser_routes())
        .merge(idea_routes())
        .merge(interaction_routes())
        .route("/health", get(health::health_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/account", get(auth::account_info))
        .route("/auth/password", put(auth::change_password))
}

/// Public uniqueness checks
fn validation_routes() -> Router<AppState> {
    Router::new()
        .route("/validation/username/:username", get(validation::check_username))
        .route("/validation/email/:email", get(validation::check_email))
}

/// Admin account management routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/accounts", get(accounts::list_accounts))
        .route("/admin/accounts/:id", get(accounts::get_account))
        .route("/admin/accounts/:id", delete(accounts::delete_account))
}

/// Superuser routes for managing admin accounts
fn superuser_routes() -> Router<AppState> {
    Router::new()
        .route("/superuser/admins", get(superuser::list_admins))
        .route("/superuser/admins", post(superuser::create_admin))
        .route("/superuser/admins/:id", delete(superuser::delete_admin))
}

/// Idea and feed routes
fn idea_routes() -> Router<AppState> {
    Router::new()
        .route("/ideas", get(ideas::list_ideas))
        .route("/ideas", post(ideas::create_idea))
        .route("/ideas/:id", get(ideas::get_idea))
        .route("/ideas/:id", delete(ideas::delete_idea))
        .route("/ideas/:id/comments", get(ideas::list_comments))
}

/// Interaction routes
fn interaction_routes() -> Router<AppState> {
    Router::new()
        .route("/interact/vote", post(interactions::vote))
        .route("/interact/unvote", post(interactions::unvote))
        .route("/interact/comment", post(interactions::comment))
}
