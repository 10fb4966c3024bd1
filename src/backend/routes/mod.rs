//! Route Configuration Module
//!
//! - **`router`** - Main router creation and transport layers
//! - **`api_routes`** - `/api` endpoints and their authorization gates

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
