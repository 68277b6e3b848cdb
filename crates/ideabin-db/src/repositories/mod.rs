//! PostgreSQL repository implementations

mod account;
mod comment;
mod error;
mod idea;
mod vote;

pub use account::PgAccountRepository;
pub use comment::PgCommentRepository;
pub use idea::PgIdeaRepository;
pub use vote::PgVoteRepository;
