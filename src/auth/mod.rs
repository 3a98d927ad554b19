use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{CredentialStore, StoreError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing token")]
    MissingCredential,

    #[error("Invalid or expired token")]
    InvalidCredential,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("JWT generation error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(username: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            username,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Authenticated identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
        }
    }
}

/// Signs and verifies HS256 tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        // No clock tolerance: a token is rejected as soon as `exp` passes
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        Ok(encode(&Header::default(), claims, &self.encoding_key)?)
    }

    /// Issue a token for `username`, valid for the configured lifetime
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        self.sign(&Claims::new(username.to_string(), self.ttl))
    }

    /// Check signature and expiry; any failure is an invalid credential
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token rejected: {}", e);
                AuthError::InvalidCredential
            })
    }

    /// Exchange a username/password pair for a token.
    ///
    /// Both fields must match a stored record exactly. Credentials are
    /// compared in plaintext.
    pub async fn issue_for_credentials(
        &self,
        users: &dyn CredentialStore,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let known = users
            .load_users()
            .await?
            .into_iter()
            .any(|u| u.username == username && u.password == password);

        if !known {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue(username)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}
