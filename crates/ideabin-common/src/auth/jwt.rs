//! JWT utilities for authentication
//!
//! Provides token issuing and validation using the `jsonwebtoken` crate.
//! Tokens are stateless bearer credentials: expiry is the only cancellation
//! mechanism, and a password change does not retroactively invalidate tokens
//! that were already issued.

use chrono::{Duration, Utc};
use ideabin_core::{Account, Identity, Role};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Account ID
    pub uid: i64,
    /// Account role
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Resolve the identity asserted by these claims
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.uid,
            username: self.sub.clone(),
            role: self.role,
        }
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Token service for issuing and validating signed bearer tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    /// Create a new token service with the given secret and time-to-live
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Token time-to-live in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issue a token asserting the account's identity
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, account: &Account) -> Result<String, AppError> {
        self.issue_with_ttl(account, self.ttl_seconds)
    }

    /// Issue a token with an explicit time-to-live
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_with_ttl(&self, account: &Account, ttl_seconds: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.username.clone(),
            uid: account.id,
            role: account.role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token, returning its claims
    ///
    /// # Errors
    /// Fails with an authentication error when the signature is invalid,
    /// required claims are missing, or the expiry has passed.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        // Zero leeway: an expired token is rejected the moment `exp` passes
        let mut validation = Validation::default();
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }

    /// Validate a token and resolve the caller's identity
    ///
    /// # Errors
    /// Returns an authentication error for an invalid or expired token
    pub fn validate(&self, token: &str) -> Result<Identity, AppError> {
        Ok(self.decode(token)?.identity())
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
