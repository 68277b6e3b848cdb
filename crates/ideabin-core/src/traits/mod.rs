//! Repository traits

mod repositories;

pub use repositories::{
    AccountRepository, CommentRepository, IdeaRepository, RepoResult, VoteRepository,
};
