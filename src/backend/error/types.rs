/**
 * Backend Error Types
 *
 * Every failure that can reach an HTTP response is a `BackendError`.
 *
 * # Status Mapping
 *
 * - Validation / malformed input, over-long password - 400
 * - Missing or rejected credentials - 401
 * - Unknown resource - 404
 * - Duplicate username - 409
 * - Store, hashing, signing, serialization failures - 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::SessionError;
use crate::backend::users::store::StoreError;
use crate::shared::SharedError;

/// Message used for every 401 so callers learn nothing about which check failed
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use storefront::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid host header");
/// let err = BackendError::not_found("User not found");
/// let err = BackendError::unauthorized();
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication or authorization failed
    #[error("Unauthorized")]
    Unauthorized,

    /// The addressed resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Client input error (from the shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// User store failure
    #[error(transparent)]
    StoreError(#[from] StoreError),

    /// Token issuance or verification failure
    #[error(transparent)]
    SessionError(#[from] SessionError),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    PasswordError(#[from] PasswordError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::StoreError(err) => match err {
                StoreError::DuplicateUsername(_) => StatusCode::CONFLICT,
                StoreError::UnexpectedId | StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::SessionError(err) => match err {
                SessionError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
                SessionError::Expired | SessionError::Invalid(_) => StatusCode::UNAUTHORIZED,
            },
            Self::PasswordError(PasswordError::Bcrypt(bcrypt::BcryptError::Truncation(_))) => {
                StatusCode::BAD_REQUEST
            }
            Self::PasswordError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            Self::SessionError(SessionError::Expired | SessionError::Invalid(_)) => {
                UNAUTHORIZED_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}
