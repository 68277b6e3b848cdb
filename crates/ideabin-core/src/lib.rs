//! # ideabin-core
//!
//! Domain layer containing entities, the authorization policy, domain errors,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Account, AuthorProjection, Comment, Identity, Idea, NewAccount, NewComment, NewIdea, Role,
    Vote,
};
pub use error::DomainError;
pub use policy::{authorize, Action};
pub use traits::{
    AccountRepository, CommentRepository, IdeaRepository, RepoResult, VoteRepository,
};
