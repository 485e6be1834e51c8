//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

/// Default endpoint of the random duck image API.
pub const DEFAULT_RANDOM_DUCK_URL: &str = "https://random-d.uk/api/v2/quack";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time-to-live in seconds for cached records
    pub ttl_seconds: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cache sweep interval in seconds
    pub sweep_interval: u64,
    /// Endpoint of the random duck image API
    pub random_duck_url: String,
    /// Timeout in seconds for outbound duck API requests
    pub fetch_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TTL_SECONDS` - Cache TTL in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Cache sweep frequency in seconds (default: 300)
    /// - `RANDOM_DUCK_URL` - Random duck API endpoint
    /// - `FETCH_TIMEOUT` - Outbound request timeout in seconds (default: 5)
    pub fn from_env() -> Self {
        Self {
            ttl_seconds: env::var("TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            random_duck_url: env::var("RANDOM_DUCK_URL")
                .unwrap_or_else(|_| DEFAULT_RANDOM_DUCK_URL.to_string()),
            fetch_timeout: env::var("FETCH_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_seconds: 60,
            server_port: 3000,
            sweep_interval: 300,
            random_duck_url: DEFAULT_RANDOM_DUCK_URL.to_string(),
            fetch_timeout: 5,
        }
    }
}
