//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Utc;
use ideabin_common::TokenService;
use ideabin_core::{Account, Role};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use sqlx::postgres::PgPoolOptions;

/// Register a fresh account and log it in, returning the registration
/// payload, the bearer token, and the created account.
async fn register_and_login(server: &TestServer) -> (RegisterRequest, String, AccountResponse) {
    let register = RegisterRequest::unique();
    let response = server.post("/auth/register", &register).await.unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest::from_register(&register);
    let response = server.post("/auth/login", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (register, token.access_token, account)
}

/// Change an account's role directly in the database.
///
/// Admin and super accounts are provisioned out of band, so tests that
/// exercise the privileged routes promote a freshly registered account
/// here and then log in again to mint a token carrying the new role.
async fn promote(username: &str, role: Role) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::query("UPDATE accounts SET role = $1 WHERE username = $2")
        .bind(role.as_str())
        .bind(username)
        .execute(&pool)
        .await
        .expect("Failed to update role");
}

/// Register an account, promote it, and log in with the promoted role.
async fn privileged_login(server: &TestServer, role: Role) -> (RegisterRequest, String) {
    let register = RegisterRequest::unique();
    let response = server.post("/auth/register", &register).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    promote(&register.username, role).await;

    let login = LoginRequest::from_register(&register);
    let response = server.post("/auth/login", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (register, token.access_token)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "ok");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/auth/register", &request).await.unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(account.username, request.username);
    assert_eq!(account.email, request.email);
    assert_eq!(account.role, "user");
    assert!(account.id > 0);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same username, different email
    let mut duplicate = request.clone();
    duplicate.email = format!("other_{}", request.email);
    let response = server.post("/auth/register", &duplicate).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "USERNAME_TAKEN");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same email, different username
    let mut duplicate = request.clone();
    duplicate.username = format!("other_{}", request.username);
    let response = server.post("/auth/register", &duplicate).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "EMAIL_TAKEN");
}

#[tokio::test]
async fn test_concurrent_registration_of_one_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Same username from two clients at once, distinct emails so only the
    // username uniqueness is in play
    let first_req = RegisterRequest::unique();
    let mut second_req = first_req.clone();
    second_req.email = format!("alt_{}", first_req.email);

    let (first, second) = tokio::join!(
        server.post("/auth/register", &first_req),
        server.post("/auth/register", &second_req),
    );
    let statuses = [first.unwrap().status(), second.unwrap().status()];

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();
    assert_eq!(created, 1, "exactly one registration must win: {statuses:?}");
    assert_eq!(conflicts, 1, "the losing registration must conflict: {statuses:?}");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "abc".to_string();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/auth/register", &register).await.unwrap();

    let login = LoginRequest::from_register(&register);
    let response = server.post("/auth/login", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!token.access_token.is_empty());
    assert_eq!(token.token_type, "Bearer");
    assert!(token.expires_in > 0);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/auth/register", &register).await.unwrap();

    let login = LoginRequest {
        username: register.username.clone(),
        password: "not-the-password".to_string(),
    };
    let response = server.post("/auth/login", &login).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_unknown_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        username: "no-such-account".to_string(),
        password: "whatever123".to_string(),
    };

    let response = server.post("/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_account_info() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, token, created) = register_and_login(&server).await;

    let response = server.get_auth("/auth/account", &token).await.unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(account.id, created.id);
    assert_eq!(account.username, register.username);
    assert_eq!(account.email, register.email);
}

#[tokio::test]
async fn test_account_info_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/auth/account").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, token, _) = register_and_login(&server).await;

    let request = ChangePasswordRequest {
        password: register.password.clone(),
        new_password: "NewPass456!".to_string(),
    };
    let response = server.put_auth("/auth/password", &token, &request).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Old password no longer works
    let login = LoginRequest::from_register(&register);
    let response = server.post("/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // New password does
    let login = LoginRequest {
        username: register.username.clone(),
        password: "NewPass456!".to_string(),
    };
    let response = server.post("/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_change_password_wrong_current() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let request = ChangePasswordRequest {
        password: "not-the-password".to_string(),
        new_password: "NewPass456!".to_string(),
    };
    let response = server.put_auth("/auth/password", &token, &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_expired_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let secret = std::env::var("JWT_SECRET").unwrap();
    let token_service = TokenService::new(&secret, 3600);

    let account = Account {
        id: 1,
        username: "ghost".to_string(),
        first_name: "Ghost".to_string(),
        last_name: "Account".to_string(),
        email: "ghost@example.com".to_string(),
        role: Role::User,
        created_at: Utc::now(),
    };
    let expired = token_service.issue_with_ttl(&account, -60).unwrap();

    let response = server.get_auth("/auth/account", &expired).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_malformed_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_auth("/auth/account", "not.a.token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Validation Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_username_availability() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, _, _) = register_and_login(&server).await;

    let path = format!("/validation/username/{}", register.username);
    let response = server.get(&path).await.unwrap();
    let check: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(check.status, "exist");

    let response = server.get("/validation/username/never_registered").await.unwrap();
    let check: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(check.status, "not exist");
}

#[tokio::test]
async fn test_email_availability() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, _, _) = register_and_login(&server).await;

    let path = format!("/validation/email/{}", register.email);
    let response = server.get(&path).await.unwrap();
    let check: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(check.status, "exist");

    let response = server
        .get("/validation/email/never@registered.example")
        .await
        .unwrap();
    let check: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(check.status, "not exist");
}

// ============================================================================
// Idea and Feed Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, token, account) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(idea.title, request.title);
    assert_eq!(idea.subtitle, request.subtitle);
    assert_eq!(idea.author.id, account.id);
    assert_eq!(idea.author.username, register.username);
    assert_eq!(idea.vote_count, 0);
    assert_eq!(idea.comment_count, 0);
    assert!(!idea.own_vote);

    let response = server
        .get_auth(&format!("/ideas/{}", idea.id), &token)
        .await
        .unwrap();
    let fetched: FeedItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, idea.id);
    assert_eq!(fetched.content, request.content);
}

#[tokio::test]
async fn test_feed_lists_created_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/ideas", &token).await.unwrap();
    let feed: Vec<FeedItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.iter().any(|item| item.id == idea.id));
}

#[tokio::test]
async fn test_get_missing_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let response = server.get_auth("/ideas/999999999", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_idea_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateIdeaRequest::unique();
    let response = server.post("/ideas", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_author_deletes_own_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/ideas/{}", idea.id);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_non_author_cannot_delete_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_token, _) = register_and_login(&server).await;
    let (_, other_token, _) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &author_token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/ideas/{}", idea.id);
    let response = server.delete_auth(&path, &other_token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_IDEA_AUTHOR");

    // Idea survives the rejected delete
    let response = server.get_auth(&path, &author_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_admin_may_delete_any_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_token, _) = register_and_login(&server).await;
    let (_, admin_token) = privileged_login(&server, Role::Admin).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &author_token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/ideas/{}", idea.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_and_unvote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author_token, _) = register_and_login(&server).await;
    let (_, voter_token, _) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &author_token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let vote = VoteRequest { idea_id: idea.id };
    let response = server.post_auth("/interact/vote", &voter_token, &vote).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Voter sees own_vote, author does not
    let path = format!("/ideas/{}", idea.id);
    let response = server.get_auth(&path, &voter_token).await.unwrap();
    let seen: FeedItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.vote_count, 1);
    assert!(seen.own_vote);

    let response = server.get_auth(&path, &author_token).await.unwrap();
    let seen: FeedItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.vote_count, 1);
    assert!(!seen.own_vote);

    // Retract
    let response = server.post_auth("/interact/unvote", &voter_token, &vote).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &voter_token).await.unwrap();
    let seen: FeedItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.vote_count, 0);
    assert!(!seen.own_vote);
}

#[tokio::test]
async fn test_double_vote_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let vote = VoteRequest { idea_id: idea.id };
    let response = server.post_auth("/interact/vote", &token, &vote).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth("/interact/vote", &token, &vote).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "ALREADY_VOTED");

    // Count stays at one
    let response = server
        .get_auth(&format!("/ideas/{}", idea.id), &token)
        .await
        .unwrap();
    let seen: FeedItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.vote_count, 1);
}

#[tokio::test]
async fn test_concurrent_votes_record_exactly_one() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Two simultaneous casts for the same (idea, account) pair; the unique
    // constraint decides the winner
    let vote = VoteRequest { idea_id: idea.id };
    let (first, second) = tokio::join!(
        server.post_auth("/interact/vote", &token, &vote),
        server.post_auth("/interact/vote", &token, &vote),
    );
    let statuses = [first.unwrap().status(), second.unwrap().status()];

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();
    assert_eq!(created, 1, "exactly one cast must win: {statuses:?}");
    assert_eq!(conflicts, 1, "the losing cast must conflict: {statuses:?}");

    let response = server
        .get_auth(&format!("/ideas/{}", idea.id), &token)
        .await
        .unwrap();
    let seen: FeedItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.vote_count, 1);
}

#[tokio::test]
async fn test_unvote_without_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let vote = VoteRequest { idea_id: idea.id };
    let response = server.post_auth("/interact/unvote", &token, &vote).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_VOTE");
}

#[tokio::test]
async fn test_vote_on_missing_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let vote = VoteRequest { idea_id: 999_999_999 };
    let response = server.post_auth("/interact/vote", &token, &vote).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_and_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, token, account) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let comment = CreateCommentRequest {
        idea_id: idea.id,
        content: "This is a substantial remark.".to_string(),
    };
    let response = server.post_auth("/interact/comment", &token, &comment).await.unwrap();
    let created: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.idea_id, idea.id);
    assert_eq!(created.content, comment.content);
    assert_eq!(created.author.id, account.id);
    assert_eq!(created.author.username, register.username);

    let second = CreateCommentRequest {
        idea_id: idea.id,
        content: "A later follow-up remark.".to_string(),
    };
    server.post_auth("/interact/comment", &token, &second).await.unwrap();

    // Listed oldest first, and the feed count reflects both
    let path = format!("/ideas/{}/comments", idea.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, comment.content);
    assert_eq!(comments[1].content, second.content);

    let response = server
        .get_auth(&format!("/ideas/{}", idea.id), &token)
        .await
        .unwrap();
    let seen: FeedItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.comment_count, 2);
}

#[tokio::test]
async fn test_comment_too_short() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let comment = CreateCommentRequest {
        idea_id: idea.id,
        content: "too short".to_string(),
    };
    let response = server.post_auth("/interact/comment", &token, &comment).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_missing_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let comment = CreateCommentRequest {
        idea_id: 999_999_999,
        content: "Commenting into the void here.".to_string(),
    };
    let response = server.post_auth("/interact/comment", &token, &comment).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_routes_forbidden_for_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token, _) = register_and_login(&server).await;

    let response = server.get_auth("/admin/accounts", &token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "ADMIN_REQUIRED");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/admin/accounts").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_lists_and_gets_accounts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, _, account) = register_and_login(&server).await;
    let (_, admin_token) = privileged_login(&server, Role::Admin).await;

    let response = server.get_auth("/admin/accounts", &admin_token).await.unwrap();
    let accounts: Vec<AccountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(accounts.iter().any(|a| a.id == account.id));

    let path = format!("/admin/accounts/{}", account.id);
    let response = server.get_auth(&path, &admin_token).await.unwrap();
    let fetched: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.username, register.username);
}

#[tokio::test]
async fn test_admin_deletes_account_with_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register, token, account) = register_and_login(&server).await;
    let (_, admin_token) = privileged_login(&server, Role::Admin).await;

    // The doomed account leaves an idea behind
    let request = CreateIdeaRequest::unique();
    let response = server.post_auth("/ideas", &token, &request).await.unwrap();
    let idea: FeedItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/admin/accounts/{}", account.id);
    let response = server.delete_auth(&path, &admin_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The account and its idea are gone
    let login = LoginRequest::from_register(&register);
    let response = server.post("/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth(&format!("/ideas/{}", idea.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_admin_delete_missing_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = privileged_login(&server, Role::Admin).await;

    let response = server
        .delete_auth("/admin/accounts/999999999", &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Superuser Tests
// ============================================================================

#[tokio::test]
async fn test_superuser_routes_forbidden_for_admins() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = privileged_login(&server, Role::Admin).await;

    let response = server.get_auth("/superuser/admins", &admin_token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "SUPER_REQUIRED");
}

#[tokio::test]
async fn test_superuser_manages_admins() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, super_token) = privileged_login(&server, Role::Super).await;

    // Create an admin
    let request = RegisterRequest::unique();
    let response = server
        .post_auth("/superuser/admins", &super_token, &request)
        .await
        .unwrap();
    let admin: AccountResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(admin.role, "admin");

    // It shows up in the admin list
    let response = server.get_auth("/superuser/admins", &super_token).await.unwrap();
    let admins: Vec<AccountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(admins.iter().any(|a| a.id == admin.id));

    // And can be demoted out of existence
    let path = format!("/superuser/admins/{}", admin.id);
    let response = server.delete_auth(&path, &super_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/superuser/admins", &super_token).await.unwrap();
    let admins: Vec<AccountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(admins.iter().all(|a| a.id != admin.id));
}

#[tokio::test]
async fn test_superuser_delete_admin_rejects_regular_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, account) = register_and_login(&server).await;
    let (_, super_token) = privileged_login(&server, Role::Super).await;

    // Regular accounts are not deletable through the admin-management route
    let path = format!("/superuser/admins/{}", account.id);
    let response = server.delete_auth(&path, &super_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
