//! Domain entities

mod account;
mod comment;
mod idea;
mod vote;

pub use account::{Account, AuthorProjection, Identity, NewAccount, Role};
pub use comment::{Comment, NewComment};
pub use idea::{Idea, NewIdea};
pub use vote::Vote;
