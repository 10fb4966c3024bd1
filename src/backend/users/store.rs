//! UserStore trait
//!
//! The seam between handlers and the document store. Handlers only ever see
//! `Arc<dyn UserStore>`; `MongoUserStore` backs production and
//! `MemoryUserStore` backs tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::users::model::{NewUser, User, UserId};

/// Errors raised by user stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert violated the unique username constraint
    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    /// Insert succeeded but the store returned an id we cannot use
    #[error("Store returned an unexpected identifier")]
    UnexpectedId,

    /// Driver-level failure
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Persistence operations on user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All stored users
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Insert a user; the store assigns the id
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// Look a user up by id
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// Look a user up by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Remove a user, returning the document as it was before deletion
    async fn delete(&self, id: &UserId) -> Result<Option<User>, StoreError>;
}
