//! User Payloads
//!
//! Request and response bodies for the `/api/users` and `/api/login`
//! endpoints. None of the response types carry a password field.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// bcrypt reads no further than this many bytes of a password
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Body of `POST /api/users`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    /// Plaintext; hashed before it reaches the store
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

impl CreateUserRequest {
    /// Check required fields before anything is hashed or stored
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.username.trim().is_empty() {
            return Err(SharedError::validation("username", "Username is required"));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password is required"));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
            ));
        }
        if self.email.trim().is_empty() {
            return Err(SharedError::validation("email", "Email is required"));
        }
        if !self.email.contains('@') {
            return Err(SharedError::validation("email", "Invalid email format"));
        }
        Ok(())
    }
}

/// Form body of `POST /api/login`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// Store identifier, hex encoded
    pub id: String,
    pub username: String,
    pub email: String,
    pub admin: bool,
}

/// Envelope returned by `GET /api/users`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// Returned by a successful login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub token: String,
}

/// Informational body for endpoints with nothing else to say
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
