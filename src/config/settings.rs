//! Configuration settings structures for linear-relay
//!
//! This module defines all configuration structures that can be loaded
//! from TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "linear-relay".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_delivery_timeout() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

// ============================================================================
// Discord Configuration
// ============================================================================

/// Discord incoming-webhook destination configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Incoming-webhook URL messages are delivered to. Required; startup
    /// fails when it is missing so notifications are never dropped
    /// silently.
    #[serde(default)]
    pub webhook_url: String,

    /// Timeout for a single delivery call in seconds
    #[serde(default = "default_delivery_timeout")]
    pub timeout_seconds: u64,
}

impl DiscordConfig {
    /// Validate Discord configuration
    ///
    /// # Validation Rules
    /// - Webhook URL must not be empty
    /// - Webhook URL must use http or https
    /// - Delivery timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook_url.is_empty() {
            return Err(ConfigError::validation(
                "discord.webhook_url",
                "Discord webhook URL is required. Set it in the configuration file or via RELAY_DISCORD__WEBHOOK_URL.",
            ));
        }

        if !self.webhook_url.starts_with("http://") && !self.webhook_url.starts_with("https://") {
            return Err(ConfigError::validation(
                "discord.webhook_url",
                "Discord webhook URL must start with http:// or https://.",
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "discord.timeout_seconds",
                "Delivery timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            timeout_seconds: default_delivery_timeout(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Tracing subscriber configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (full, compact, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LoggerConfig {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                "Invalid log level. Valid values are: trace, debug, info, warn, error.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::validation(
                "logger.format",
                "Invalid log format. Valid values are: full, compact, json.",
            ));
        }

        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Discord destination settings
    #[serde(default)]
    pub discord: DiscordConfig,

    /// Logger settings
    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.discord.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            discord: DiscordConfig {
                webhook_url: "https://discord.com/api/webhooks/123/token".to_string(),
                timeout_seconds: 5,
            },
            ..Settings::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.discord.timeout_seconds, 5);
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_server_address() {
        let settings = valid_settings();
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_valid_settings_pass_validation() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_missing_webhook_url_fails_validation() {
        let settings = Settings::default();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("discord.webhook_url"));
    }

    #[test]
    fn test_non_http_webhook_url_fails_validation() {
        let mut settings = valid_settings();
        settings.discord.webhook_url = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_port_fails_validation() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_delivery_timeout_fails_validation() {
        let mut settings = valid_settings();
        settings.discord.timeout_seconds = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_fails_validation() {
        let mut settings = valid_settings();
        settings.logger.level = "verbose".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [discord]
            webhook_url = "https://discord.com/api/webhooks/1/t"
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        // Unspecified sections fall back to defaults
        assert_eq!(settings.logger.level, "info");
        assert!(settings.validate().is_ok());
    }
}
