//! Middleware Module
//!
//! - **`auth`** - Session and admin gates, `AuthUser` extractor
//! - **`security`** - Host guard and security response headers

pub mod auth;
pub mod security;

pub use auth::{require_admin, require_session, session_token, AuthUser, AuthenticatedUser};
pub use security::{enforce_host, with_security_headers, HostGuard};
