/**
 * Server Configuration
 *
 * Reads the server settings from environment variables (after `.env` has
 * been loaded by `main`).
 *
 * # Variables
 *
 * - `PORT` - listen port, default 8080
 * - `MONGODB_URI` - required
 * - `MONGODB_DATABASE` - default `storefront`
 * - `JWT_SECRET` - required, non-empty
 * - `BCRYPT_COST` - default 12, 4..=31
 * - `EXPECTED_HOST` - optional Host header guard
 * - `PUBLIC_DIR` - static file root, default `./public`
 * - `REQUEST_TIMEOUT_SECS` - default 30
 *
 * Required values are never defaulted; a missing secret or connection string
 * stops startup.
 */

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::backend::auth::password::{MAX_COST, MIN_COST};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE: &str = "storefront";
pub const DEFAULT_PUBLIC_DIR: &str = "./public";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0} must be set")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings consumed by the router's transport layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// When set, requests with any other `Host` header are rejected
    pub expected_host: Option<String>,
    pub public_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            expected_host: None,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub mongodb_uri: String,
    pub database: String,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
    pub http: HttpConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mongodb_uri = get("MONGODB_URI").ok_or(ConfigError::MissingValue("MONGODB_URI"))?;
        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let bcrypt_cost = parse_or(get("BCRYPT_COST"), "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }
        let timeout_secs = parse_or(
            get("REQUEST_TIMEOUT_SECS"),
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            port,
            mongodb_uri,
            database: get("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            jwt_secret,
            bcrypt_cost,
            http: HttpConfig {
                expected_host: get("EXPECTED_HOST"),
                public_dir: get("PUBLIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
                request_timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

// Keeps the secret and connection string out of logs
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database", &self.database)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
