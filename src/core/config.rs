//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Log levels accepted by `MCP_LOG_LEVEL`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,

    /// Usage instructions sent to clients on initialize.
    pub instructions: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Demo".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: "Demo MCP server. Tools: add, multiply, getWeather, getUserProfile, \
                           getTodos, convertCurrency, analyzeSentiment and generateDocument \
                           (templates: invoice, report, proposal, letter)."
                .to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }

    /// Check values that cannot be expressed in the types.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::config(format!(
                "unknown log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "Demo");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "docs-server");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "docs-server");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "DEBUG");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "DEBUG");
        assert!(config.validate().is_ok());
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.server.name = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
