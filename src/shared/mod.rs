//! Shared Module
//!
//! Types that cross the HTTP boundary. Everything here is plain serde data so
//! API clients can depend on the same definitions as the server.

/// Shared error types
pub mod error;

/// User request and response payloads
pub mod user;

pub use error::SharedError;
pub use user::{CreateUserRequest, LoginRequest, MessageResponse, TokenResponse, UserListResponse, UserResponse};
