//! # ideabin-db
//!
//! Database layer implementing the repository traits from `ideabin-core`
//! with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Repository implementations with SQL error mapping
//! - Explicit transactions for cascading deletes (see `schema.sql` for the
//!   uniqueness constraints that back the conflict semantics)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ideabin_db::pool::{create_pool, DatabaseConfig};
//! use ideabin_db::repositories::PgAccountRepository;
//! use ideabin_core::traits::AccountRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let account_repo = PgAccountRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAccountRepository, PgCommentRepository, PgIdeaRepository, PgVoteRepository,
};
