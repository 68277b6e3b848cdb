//! Authorization policy
//!
//! A pure decision function over `(identity, action)`. Handlers never match
//! on role strings; every privileged operation goes through [`authorize`].
//! Authentication (who are you) is resolved before this point - the policy
//! only answers "may you".

use crate::entities::Identity;
use crate::error::DomainError;

/// Actions gated by the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List every account in the store
    ListAccounts,
    /// Fetch an arbitrary account by id
    GetAccount,
    /// Delete an arbitrary account (cascades to owned content)
    DeleteAccount,
    /// List, create, or delete admin accounts
    ManageAdmins,
    /// Post a new idea
    CreateIdea,
    /// Delete an idea owned by `author_id`
    DeleteIdea { author_id: i64 },
    /// Read the feed or an idea detail view
    ReadFeed,
    /// Cast or retract a vote
    Vote,
    /// Post a comment
    Comment,
}

/// Decide whether `identity` may perform `action`.
///
/// # Errors
/// Returns an authorization-classified [`DomainError`] when the identity
/// lacks the required role or ownership. Never errors for merely being
/// authenticated: `CreateIdea`, `ReadFeed`, `Vote`, and `Comment` are open to
/// every valid identity.
pub fn authorize(identity: &Identity, action: &Action) -> Result<(), DomainError> {
    match action {
        Action::ListAccounts | Action::GetAccount | Action::DeleteAccount => {
            if identity.role.is_admin() {
                Ok(())
            } else {
                Err(DomainError::AdminRequired)
            }
        }
        Action::ManageAdmins => {
            if identity.role.is_super() {
                Ok(())
            } else {
                Err(DomainError::SuperRequired)
            }
        }
        Action::DeleteIdea { author_id } => {
            if identity.id == *author_id || identity.role.is_admin() {
                Ok(())
            } else {
                Err(DomainError::NotIdeaAuthor)
            }
        }
        Action::CreateIdea | Action::ReadFeed | Action::Vote | Action::Comment => Ok(()),
    }
}

/// Convenience guard for admin-only operations
pub fn require_admin(identity: &Identity) -> Result<(), DomainError> {
    authorize(identity, &Action::ListAccounts)
}

/// Convenience guard for superuser-only operations
pub fn require_super(identity: &Identity) -> Result<(), DomainError> {
    authorize(identity, &Action::ManageAdmins)
}
