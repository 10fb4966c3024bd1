//! Common test utilities and helpers
//!
//! - In-process test application over the in-memory store
//! - Authentication helpers (seeded users, tokens, requests)
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;

pub use auth_helpers::*;
