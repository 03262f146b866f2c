//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Public base URL of this backend, for share links.
    pub public_base_url: Option<String>,
    /// Public base URL of the frontend; preferred for share links when set.
    pub frontend_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SCRIBE_ADDR` | Server bind address | `127.0.0.1:8780` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:scribe.db?mode=rwc` |
    /// | `PUBLIC_BASE_URL` | Backend base URL for share links | derived from addr |
    /// | `FRONTEND_PUBLIC_BASE_URL` | Frontend base URL for share links | (none) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("SCRIBE_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8780".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| "sqlite:scribe.db?mode=rwc".to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let frontend_base_url = env::var("FRONTEND_PUBLIC_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            addr,
            database_url,
            public_base_url,
            frontend_base_url,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SCRIBE_ADDR format")]
    InvalidAddr,
}
