/**
 * Session Tokens
 *
 * HS256 JWTs asserting a user id. Tokens are stateless: nothing is stored,
 * and a token stays valid until it expires.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifetime of an issued token
pub const TOKEN_TTL_HOURS: i64 = 24;

/// The only accepted signing algorithm
const ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID (hex ObjectId)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to sign session token: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("Session token has expired")]
    Expired,

    #[error("Invalid session token: {0}")]
    Invalid(String),
}

/// Signing and verification keys derived from the server secret
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionKeys {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Create a token for `user_id`, valid for 24 hours from now
    pub fn issue(&self, user_id: &str) -> Result<String, SessionError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a token as if issued at `issued_at`
    pub fn issue_at(&self, user_id: &str, issued_at: DateTime<Utc>) -> Result<String, SessionError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding).map_err(SessionError::Signing)
    }

    /// Verify signature, algorithm and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                other => SessionError::Invalid(format!("{:?}", other)),
            })
    }
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("algorithm", &ALGORITHM)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
