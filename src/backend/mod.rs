//! Backend Module
//!
//! All server-side code for the storefront API. Only compiled with the `ssr`
//! feature.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app construction
//! - **`routes`** - Router assembly and transport layers
//! - **`auth`** - Password hashing, JWT sessions, login/logout handlers
//! - **`users`** - User model, store implementations, CRUD handlers
//! - **`middleware`** - Authorization gate, host guard, security headers
//! - **`error`** - `BackendError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Passwords, sessions, login handlers
//! ├── users/          - Store and user handlers
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user store (`Arc<dyn UserStore>`), the session keys
//! and the password hasher. It is built once at startup and handed to the
//! router; handlers pull the parts they need through `FromRef`.
//!
//! # Request Flow
//!
//! inbound request → transport layers → authorization gate (protected routes
//! only) → handler → store → JSON response.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication: passwords, session tokens, login handlers
pub mod auth;

/// User accounts: model, stores, handlers
pub mod users;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
