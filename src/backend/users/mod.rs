//! Users Module
//!
//! The single resource this API manages.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs       - Module exports
//! ├── model.rs     - Stored user document and its public view
//! ├── store.rs     - `UserStore` trait and `StoreError`
//! ├── mongo.rs     - MongoDB implementation
//! ├── memory.rs    - In-memory implementation (tests, local runs)
//! └── handlers.rs  - List / create / get / delete handlers
//! ```

/// Stored user document
pub mod model;

/// Store trait and errors
pub mod store;

/// MongoDB-backed store
pub mod mongo;

/// In-memory store
pub mod memory;

/// HTTP handlers for `/api/users`
pub mod handlers;

pub use model::{parse_user_id, NewUser, User, UserId};
pub use store::{StoreError, UserStore};
pub use handlers::{create_user, delete_user, get_user, list_users};
