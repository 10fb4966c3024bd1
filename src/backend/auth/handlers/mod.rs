//! Authentication Handlers
//!
//! - **`login`** - POST /api/login - form credentials in, session token out
//! - **`logout`** - POST /api/logout - requires a session, no server state to clear

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
