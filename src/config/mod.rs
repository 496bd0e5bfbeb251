//! Configuration module for seatboard.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external blob store; None selects the in-memory store
    pub store_url: Option<String>,
    /// Path to the static seat status JSON file
    pub seats_path: PathBuf,
    /// Seat grid dimensions
    pub grid_rows: usize,
    pub grid_cols: usize,
    /// Prefix for seat identifiers
    pub grid_prefix: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let store_url = env::var("SEATBOARD_STORE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string());

        let seats_path = env::var("SEATBOARD_SEATS_PATH")
            .unwrap_or_else(|_| "./data/seats.json".to_string())
            .into();

        let grid_rows = env::var("SEATBOARD_GRID_ROWS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(19);

        let grid_cols = env::var("SEATBOARD_GRID_COLS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(19);

        let grid_prefix = env::var("SEATBOARD_GRID_PREFIX").unwrap_or_else(|_| "A".to_string());

        let bind_addr = env::var("SEATBOARD_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid SEATBOARD_BIND_ADDR format");

        let log_level = env::var("SEATBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            store_url,
            seats_path,
            grid_rows,
            grid_cols,
            grid_prefix,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("SEATBOARD_STORE_URL");
        env::remove_var("SEATBOARD_SEATS_PATH");
        env::remove_var("SEATBOARD_GRID_ROWS");
        env::remove_var("SEATBOARD_GRID_COLS");
        env::remove_var("SEATBOARD_GRID_PREFIX");
        env::remove_var("SEATBOARD_BIND_ADDR");
        env::remove_var("SEATBOARD_LOG_LEVEL");

        let config = Config::from_env();

        assert!(config.store_url.is_none());
        assert_eq!(config.seats_path, PathBuf::from("./data/seats.json"));
        assert_eq!(config.grid_rows, 19);
        assert_eq!(config.grid_cols, 19);
        assert_eq!(config.grid_prefix, "A");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }
}
