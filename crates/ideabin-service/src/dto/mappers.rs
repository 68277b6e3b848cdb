//! Mappers from domain entities to response DTOs
//!
//! The feed join is a pure function over pre-fetched batches, so the
//! aggregation logic is testable without a database.

use std::collections::{HashMap, HashSet};

use ideabin_core::{Account, AuthorProjection, Comment, Idea};

use super::responses::{AccountResponse, CommentResponse, FeedItemResponse};

/// Map an account entity to its full response view
pub fn account_to_response(account: &Account) -> AccountResponse {
    AccountResponse {
        id: account.id,
        username: account.username.clone(),
        first_name: account.first_name.clone(),
        last_name: account.last_name.clone(),
        email: account.email.clone(),
        role: account.role.as_str().to_string(),
        created_at: account.created_at,
    }
}

/// Join ideas with their batch-loaded facts into feed records, preserving the
/// input idea order.
///
/// `vote_counts` and `comment_counts` are `(idea_id, count)` pairs; ideas
/// absent from them have zero. `voted_idea_ids` is the requester's voted
/// subset. An idea whose author is missing from `authors` is dropped rather
/// than rendered with a dangling reference; cascades make that window narrow.
pub fn assemble_feed(
    ideas: Vec<Idea>,
    authors: &[Account],
    vote_counts: &[(i64, i64)],
    comment_counts: &[(i64, i64)],
    voted_idea_ids: &[i64],
) -> Vec<FeedItemResponse> {
    let authors_by_id: HashMap<i64, AuthorProjection> = authors
        .iter()
        .map(|a| (a.id, a.author_projection()))
        .collect();
    let votes: HashMap<i64, i64> = vote_counts.iter().copied().collect();
    let comments: HashMap<i64, i64> = comment_counts.iter().copied().collect();
    let voted: HashSet<i64> = voted_idea_ids.iter().copied().collect();

    ideas
        .into_iter()
        .filter_map(|idea| {
            let author = authors_by_id.get(&idea.author_id)?.clone();
            Some(FeedItemResponse {
                id: idea.id,
                title: idea.title,
                subtitle: idea.subtitle,
                content: idea.content,
                author,
                vote_count: votes.get(&idea.id).copied().unwrap_or(0),
                comment_count: comments.get(&idea.id).copied().unwrap_or(0),
                own_vote: voted.contains(&idea.id),
                created_at: idea.created_at,
            })
        })
        .collect()
}

/// Join comments with their batch-loaded authors, preserving the input
/// comment order.
pub fn assemble_comments(comments: Vec<Comment>, authors: &[Account]) -> Vec<CommentResponse> {
    let authors_by_id: HashMap<i64, AuthorProjection> = authors
        .iter()
        .map(|a| (a.id, a.author_projection()))
        .collect();

    comments
        .into_iter()
        .filter_map(|comment| {
            let author = authors_by_id.get(&comment.author_id)?.clone();
            Some(CommentResponse {
                id: comment.id,
                idea_id: comment.idea_id,
                content: comment.content,
                author,
                created_at: comment.created_at,
            })
        })
        .collect()
}
