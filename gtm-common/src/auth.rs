//! Bearer-token authentication
//!
//! Tokens are opaque random strings handed to a signed-in user. Only their
//! SHA-256 digest is stored, in the `auth_tokens` table.
//!
//! The HTTP side (header extraction, 401 responses) lives in the service;
//! this module holds the pure parsing/hashing helpers and the verifier.

use crate::{Error, Result};
use async_trait::async_trait;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[cfg(feature = "sqlx")]
use sqlx::SqlitePool;

/// Caller identity resolved from a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Extract the token from an `Authorization` header value
///
/// # Examples
/// ```
/// use gtm_common::auth::parse_bearer;
///
/// assert_eq!(parse_bearer(Some("Bearer abc123")).unwrap(), "abc123");
/// assert!(parse_bearer(Some("Basic abc123")).is_err());
/// assert!(parse_bearer(None).is_err());
/// ```
pub fn parse_bearer(header: Option<&str>) -> Result<&str> {
    let header =
        header.ok_or_else(|| Error::Unauthorized("No authorization header".to_string()))?;
    match header.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(Error::Unauthorized("Malformed authorization header".to_string())),
    }
}

/// SHA-256 of the token as 64 lowercase hex characters
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fresh random token (256 bits, hex encoded)
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Resolves a bearer token to the user it was issued to
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// `Err(Error::Unauthorized)` for unknown tokens
    async fn verify(&self, token: &str) -> Result<AuthUser>;
}

/// Verifier backed by the `auth_tokens` table
#[cfg(feature = "sqlx")]
#[derive(Debug, Clone)]
pub struct SqliteTokenVerifier {
    db: SqlitePool,
}

#[cfg(feature = "sqlx")]
impl SqliteTokenVerifier {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[cfg(feature = "sqlx")]
#[async_trait]
impl TokenVerifier for SqliteTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthUser> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
            SELECT u.id, u.email
            FROM auth_tokens t
            JOIN users u ON u.id = t.user_id
            WHERE t.token_digest = ?
            "#,
        )
        .bind(token_digest(token))
        .fetch_optional(&self.db)
        .await?;

        row.map(|(id, email)| AuthUser { id, email })
            .ok_or_else(|| Error::Unauthorized("Authentication failed".to_string()))
    }
}

/// Register a user; returns the new user id
#[cfg(feature = "sqlx")]
pub async fn create_user(db: &SqlitePool, email: &str) -> Result<String> {
    let id = crate::uuid_utils::generate().to_string();
    sqlx::query("INSERT INTO users (id, email) VALUES (?, ?)")
        .bind(&id)
        .bind(email)
        .execute(db)
        .await?;
    Ok(id)
}

/// Id of the user registered under `email`, registering them if needed
#[cfg(feature = "sqlx")]
pub async fn ensure_user(db: &SqlitePool, email: &str) -> Result<String> {
    let existing: Option<String> = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(db)
        .await?;

    match existing {
        Some(id) => Ok(id),
        None => create_user(db, email).await,
    }
}

/// Issue a token for `user_id`; the plaintext is returned once and never stored
#[cfg(feature = "sqlx")]
pub async fn issue_token(db: &SqlitePool, user_id: &str) -> Result<String> {
    let token = generate_token();
    sqlx::query("INSERT INTO auth_tokens (token_digest, user_id) VALUES (?, ?)")
        .bind(token_digest(&token))
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable_hex() {
        let digest = token_digest("secret-token");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, token_digest("secret-token"));
        assert_ne!(digest, token_digest("secret-tokem"));
    }

    #[test]
    fn test_generated_tokens_differ() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_bearer_rejects_empty_token() {
        assert!(matches!(
            parse_bearer(Some("Bearer   ")),
            Err(Error::Unauthorized(_))
        ));
    }
}
