//! Server Module
//!
//! - **`config`** - Environment configuration
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - State construction and app creation

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, HttpConfig, ServerConfig};
pub use init::create_app;
pub use state::AppState;
