/// Bearer authentication
///
/// Protected routes run behind a layer that reads `Authorization: Bearer <jwt>`,
/// validates the token with [`authenticate`] and stores the resulting
/// [`AuthContext`] in the request extensions. Handlers pick it up with
/// `Extension<AuthContext>`.
///
/// # Example
///
/// ```
/// use axum::http::{header, HeaderMap, HeaderValue};
/// use chrono::Duration;
/// use taskboard_shared::auth::jwt::{create_token, Claims};
/// use taskboard_shared::auth::middleware::authenticate;
///
/// let secret = "test-secret-key-at-least-32-bytes-long";
/// let token = create_token(&Claims::new(9, Duration::hours(1)), secret).unwrap();
///
/// let mut headers = HeaderMap::new();
/// headers.insert(
///     header::AUTHORIZATION,
///     HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
/// );
///
/// assert_eq!(authenticate(&headers, secret).unwrap().user_id, 9);
/// ```

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

use super::jwt::{validate_user_token, JwtError};

/// Identity of the caller, added to request extensions after authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID (the token's subject)
    pub user_id: i64,
}

impl AuthContext {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

/// Error type for bearer authentication
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header
    #[error("Missing authorization header")]
    MissingCredentials,

    /// Header present but not a Bearer credential
    #[error("{0}")]
    InvalidScheme(String),

    /// Token was rejected (signature, issuer, expiry)
    #[error("{0}")]
    InvalidToken(String),

    /// Token could not be decoded
    #[error("{0}")]
    MalformedToken(String),
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => AuthError::InvalidToken("Token has expired".to_string()),
            JwtError::InvalidFormat(msg) => AuthError::MalformedToken(format!("Invalid token: {}", msg)),
            other => AuthError::InvalidToken(format!("Invalid token: {}", other)),
        }
    }
}

/// Extracts the raw token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::InvalidScheme("Authorization header is not valid text".to_string()))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidScheme("Expected 'Authorization: Bearer <token>'".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    Ok(token)
}

/// Authenticates a request from its headers
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthContext, AuthError> {
    let token = bearer_token(headers)?;
    let user_id = validate_user_token(token, secret)?;

    Ok(AuthContext::new(user_id))
}
