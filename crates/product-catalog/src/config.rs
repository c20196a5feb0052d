//! Catalog client configuration.
//!
//! Values come from environment variables, optionally seeded from a `.env` file:
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `CATALOG_API_URL` | base URL of the catalog API | required |
//! | `CATALOG_REQUEST_TIMEOUT_SECS` | per-request timeout | none (wait forever) |
//! | `CATALOG_STORE_BUFFER` | request channel capacity of each store | 32 |

use std::time::Duration;
use thiserror::Error;

pub const API_URL_VAR: &str = "CATALOG_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "CATALOG_REQUEST_TIMEOUT_SECS";
pub const STORE_BUFFER_VAR: &str = "CATALOG_STORE_BUFFER";

const DEFAULT_STORE_BUFFER: usize = 32;

/// Errors raised while reading the configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration for connecting to the catalog API.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL (e.g. "http://localhost:3000"), without trailing slash.
    pub api_url: String,

    /// Request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,

    /// Channel capacity of each store actor.
    pub store_buffer: usize,
}

impl CatalogConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            request_timeout: None,
            store_buffer: DEFAULT_STORE_BUFFER,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the store channel capacity
    pub fn with_store_buffer(mut self, store_buffer: usize) -> Self {
        self.store_buffer = store_buffer.max(1);
        self
    }

    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(API_URL_VAR))?;
        let mut config = Self::new(api_url.trim());

        if let Some(raw) = lookup(REQUEST_TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: REQUEST_TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup(STORE_BUFFER_VAR) {
            let buffer: usize = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: STORE_BUFFER_VAR,
                value: raw.clone(),
            })?;
            config = config.with_store_buffer(buffer);
        }

        Ok(config)
    }
}
