//! Authentication Module
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt password hashing
//! ├── sessions.rs     - JWT issuance and verification
//! └── handlers/       - login / logout
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: username and password form → password verified → token returned
//! 2. **Protected request**: token in `Authorization` → verified by middleware → identity attached
//! 3. **Logout**: acknowledged; the token simply expires
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (salted, adaptive cost)
//! - Tokens are HS256 only, expire after 24 hours, no clock leeway
//! - Every authentication failure returns the same 401 body

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout};
pub use password::PasswordHasher;
pub use sessions::{Claims, SessionError, SessionKeys};
