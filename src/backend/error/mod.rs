//! Backend Error Module
//!
//! - **`types`** - `BackendError` and its status mapping
//! - **`conversion`** - `IntoResponse` rendering as `{"error", "status"}`
//!
//! Handlers return `Result<_, BackendError>` and use `?` on store, session
//! and hashing results; the conversion takes care of the HTTP side.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
