//! Configuration management for the MCP server.
//!
//! The configuration is read once at startup and then shared immutably
//! (`Arc<Config>`) with the transport layer and the Vercel client.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::vercel::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the Vercel bearer token.
pub const TOKEN_ENV: &str = "VERCEL_API_TOKEN";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Vercel API access.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` (and `.env`, if present).
    ///
    /// Usable before the rest of the configuration is loaded, so the
    /// subscriber is installed before anything in [`Config::from_env`] logs.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var("MCP_LOG_LEVEL") {
            Ok(level) if !level.trim().is_empty() => Self {
                level: level.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}

/// Vercel API access settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bearer token sent with every request.
    #[serde(skip_serializing, default)]
    pub token: String,

    /// Base URL of the REST API.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "vercel-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables (and `.env`, if present).
    ///
    /// Fails when `VERCEL_API_TOKEN` is missing or blank: no tool can work
    /// without it.
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            logging: LoggingConfig::from_env(),
            ..Self::default()
        };

        config.api.token = std::env::var(TOKEN_ENV)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config(format!("{TOKEN_ENV} environment variable is not set")))?;

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(base_url) = std::env::var("VERCEL_API_URL") {
            info!("Using Vercel API base URL {}", base_url);
            config.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("VERCEL_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.api.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid VERCEL_API_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.api.timeout_secs
                ),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var(TOKEN_ENV);
            std::env::remove_var("VERCEL_API_URL");
            std::env::remove_var("VERCEL_API_TIMEOUT_SECS");
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[test]
    fn test_token_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(TOKEN_ENV, "tok_12345");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.token, "tok_12345");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        clear_env();
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains(TOKEN_ENV)));
    }

    #[test]
    fn test_blank_token_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(TOKEN_ENV, "   ");
        }
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_api_overrides_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(TOKEN_ENV, "tok");
            std::env::set_var("VERCEL_API_URL", "http://localhost:9999");
            std::env::set_var("VERCEL_API_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9999");
        assert_eq!(config.api.timeout_secs, 5);
        clear_env();
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(TOKEN_ENV, "tok");
            std::env::set_var("VERCEL_API_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        clear_env();
    }

    #[test]
    fn test_log_level_readable_without_token() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        assert_eq!(LoggingConfig::from_env().level, "info");
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        assert_eq!(LoggingConfig::from_env().level, "debug");
        assert!(Config::from_env().is_err());
        unsafe {
            std::env::set_var(TOKEN_ENV, "tok");
        }
        assert_eq!(Config::from_env().unwrap().logging.level, "debug");
        clear_env();
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let api = ApiConfig {
            token: "super_secret_token".to_string(),
            ..ApiConfig::default()
        };
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_token_not_serialized() {
        let mut config = Config::default();
        config.api.token = "super_secret_token".to_string();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super_secret_token"));
    }
}
