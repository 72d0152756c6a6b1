//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::fetch::DEFAULT_FETCH_TIMEOUT_SECS;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds a fetched page stays fresh
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Upstream request timeout in seconds
    pub fetch_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Entries become stale this many seconds after being cached (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `FETCH_TIMEOUT` - Upstream request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            cache_ttl: env_or("CACHE_TTL", DEFAULT_TTL_SECS),
            server_port: env_or("SERVER_PORT", 3000),
            fetch_timeout: env_or("FETCH_TIMEOUT", DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL_SECS,
            server_port: 3000,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}
