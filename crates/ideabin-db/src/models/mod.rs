//! Database row models
//!
//! Each model derives `FromRow` and converts into its domain entity.

mod account;
mod comment;
mod idea;
mod vote;

pub use account::AccountModel;
pub use comment::CommentModel;
pub use idea::IdeaModel;
pub use vote::VoteModel;
