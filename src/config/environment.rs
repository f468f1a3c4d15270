//! Environment configuration
//!
//! The document store credentials are six opaque strings supplied via the
//! process environment. All six are required: if any is absent the
//! application must enter the terminal `Unconfigured` state instead of
//! attempting a connection, so `from_env` reports the missing variable
//! rather than panicking.

use std::env;

use thiserror::Error;

/// Configuration failure: a required environment variable is absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Opaque credentials and identifiers for the managed document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub database_id: String,
    pub sender_id: String,
    pub app_id: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary lookup function. Variables are checked in a
    /// fixed order, so a given environment always reports the same missing
    /// variable first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        Ok(Self {
            api_key: require("WORKSHOP_STORE_API_KEY")?,
            auth_domain: require("WORKSHOP_STORE_AUTH_DOMAIN")?,
            project_id: require("WORKSHOP_STORE_PROJECT_ID")?,
            database_id: require("WORKSHOP_STORE_DATABASE_ID")?,
            sender_id: require("WORKSHOP_STORE_SENDER_ID")?,
            app_id: require("WORKSHOP_STORE_APP_ID")?,
        })
    }
}

/// HTTP server bind settings, optional with defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        Self { host, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
