//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default autocomplete endpoint queried on cache misses.
pub const DEFAULT_PROVIDER_URL: &str = "http://suggestqueries.google.com/complete/search";

/// Response variant that carries relevance scores.
pub const DEFAULT_PROVIDER_CLIENT: &str = "chrome";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Suggestion provider endpoint
    pub provider_url: String,
    /// Value of the provider's `client` query parameter
    pub provider_client: String,
    /// Whole-request timeout for provider calls, in seconds
    pub provider_timeout: u64,
    /// Connect timeout for provider calls, in seconds
    pub provider_connect_timeout: u64,
    /// Lifetime of a cached suggestion list, in seconds
    pub cache_ttl: u64,
    /// Maximum number of keywords the cache can hold
    pub max_entries: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `PROVIDER_URL` - Autocomplete endpoint (default: Google suggest)
    /// - `PROVIDER_CLIENT` - Response variant (default: chrome)
    /// - `PROVIDER_TIMEOUT` - Request timeout in seconds (default: 5)
    /// - `PROVIDER_CONNECT_TIMEOUT` - Connect timeout in seconds (default: 2)
    /// - `CACHE_TTL` - Cache entry lifetime in seconds (default: 3600)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            provider_url: env::var("PROVIDER_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.provider_url),
            provider_client: env::var("PROVIDER_CLIENT")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.provider_client),
            provider_timeout: parse_var("PROVIDER_TIMEOUT").unwrap_or(defaults.provider_timeout),
            provider_connect_timeout: parse_var("PROVIDER_CONNECT_TIMEOUT")
                .unwrap_or(defaults.provider_connect_timeout),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Cache entry lifetime as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            provider_client: DEFAULT_PROVIDER_CLIENT.to_string(),
            provider_timeout: 5,
            provider_connect_timeout: 2,
            cache_ttl: 3600,
            max_entries: 1000,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.provider_url, DEFAULT_PROVIDER_URL);
        assert_eq!(config.provider_client, "chrome");
        assert_eq!(config.provider_timeout, 5);
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.max_entries, 1000);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment so parallel tests can't race on it
        for name in [
            "SERVER_PORT",
            "PROVIDER_URL",
            "PROVIDER_CLIENT",
            "PROVIDER_TIMEOUT",
            "PROVIDER_CONNECT_TIMEOUT",
            "CACHE_TTL",
            "MAX_ENTRIES",
            "CLEANUP_INTERVAL",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.provider_url, DEFAULT_PROVIDER_URL);
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.cleanup_interval, 60);

        env::set_var("CACHE_TTL", "120");
        env::set_var("PROVIDER_TIMEOUT", "not-a-number");
        env::set_var("PROVIDER_URL", "http://127.0.0.1:9999/complete");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 120);
        assert_eq!(config.provider_timeout, 5);
        assert_eq!(config.provider_url, "http://127.0.0.1:9999/complete");

        env::remove_var("CACHE_TTL");
        env::remove_var("PROVIDER_TIMEOUT");
        env::remove_var("PROVIDER_URL");
    }
}
