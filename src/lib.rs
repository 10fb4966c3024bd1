//! Storefront - Main Library
//!
//! Storefront is the backend of a small e-commerce site: an Axum HTTP API
//! over a MongoDB document store, with JWT session tokens and an admin-only
//! management surface for user accounts.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and validation errors shared with API clients
//!   - User views, list envelopes, token responses
//!   - Request payloads and their validation
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router, transport layers and application state
//!   - Password hashing and JWT session tokens
//!   - Authorization middleware
//!   - User store (MongoDB and in-memory) and resource handlers
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::backend::server::{config::ServerConfig, init::create_app};
//! use storefront::backend::users::mongo::MongoUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let store = MongoUserStore::connect(&config.mongodb_uri, &config.database).await?;
//! let app = create_app(&config, Arc::new(store));
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations, propagated with `?`
//! - `shared::SharedError` for validation failures
//! - `backend::error::BackendError` for everything that reaches an HTTP response

/// Shared wire types and validation errors
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
