use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Metadata key / header name the fault signal is read from by default
pub const DEFAULT_SIGNAL_KEY: &str = "x-grpc-test";

/// Complete bookstore configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookstoreConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub fault: FaultConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener configuration for both transports
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP API bind address
    pub http_addr: SocketAddr,
    /// gRPC API bind address
    pub grpc_addr: SocketAddr,
    /// Serve the REST-style HTTP API
    pub enable_http: bool,
    /// Serve the gRPC API
    pub enable_grpc: bool,
    /// Grace period for in-flight HTTP requests on shutdown
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub shutdown_timeout: Duration,
}

/// Resource store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Data loaded at startup
    #[serde(default)]
    pub seed: SeedSet,
    /// Theme substituted when a shelf is created with an empty theme.
    /// `None` keeps the empty theme verbatim.
    #[serde(default)]
    pub default_theme: Option<String>,
}

/// Demo data sets the store can start with
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SeedSet {
    /// Fiction/Fantasy shelves with allocated ids 1..=4
    #[default]
    Demo,
    /// Kids/Classic shelves with fixed ids 100/200 and books 1001/2001
    Classic,
    /// No data
    Empty,
}

/// Fault injection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FaultConfig {
    /// Honour fault signals at all
    pub enabled: bool,
    /// Request metadata key (gRPC) / header name (HTTP) carrying the signal
    pub signal_key: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: LogFormat,
    /// Enable ANSI colors in output
    pub enable_colors: bool,
    /// Log every inbound request and its metadata
    pub log_requests: bool,
}

/// Log output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            grpc_addr: SocketAddr::from(([127, 0, 0, 1], 8082)),
            enable_http: true,
            enable_grpc: true,
            shutdown_timeout: Duration::from_secs(5),
        }
    }
}

impl ServerConfig {
    /// Shutdown grace period in whole seconds, rounded up
    pub fn shutdown_timeout_secs(&self) -> u64 {
        let secs = self.shutdown_timeout.as_secs();
        if self.shutdown_timeout.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            signal_key: DEFAULT_SIGNAL_KEY.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            enable_colors: true,
            log_requests: true,
        }
    }
}

/// Configuration loading and management
impl BookstoreConfig {
    /// Load configuration from file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML document; missing sections take defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.server.enable_http && !self.server.enable_grpc {
            return Err(ConfigError::Validation(
                "At least one of HTTP and gRPC must be enabled".to_string(),
            ));
        }

        if self.server.enable_http
            && self.server.enable_grpc
            && self.server.http_addr == self.server.grpc_addr
        {
            return Err(ConfigError::Validation(
                "HTTP and gRPC addresses cannot be the same".to_string(),
            ));
        }

        // gRPC metadata keys are lowercase ASCII
        let key = &self.fault.signal_key;
        if key.is_empty() {
            return Err(ConfigError::Validation(
                "Fault signal key cannot be empty".to_string(),
            ));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(ConfigError::Validation(format!(
                "Invalid fault signal key: {key}. Use lowercase letters, digits, '-' or '_'"
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }

    /// Get default configuration file paths
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("bookstore.toml"),
            PathBuf::from("config/bookstore.toml"),
            PathBuf::from("/etc/bookstore/config.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("bookstore").join("config.toml"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".bookstore.toml"));
        }

        paths
    }

    /// Find and load configuration file from default locations
    pub fn load_default() -> Result<Self, ConfigError> {
        for path in Self::default_config_paths() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, return default configuration
        Ok(Self::default())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

// Configuration tests are in test.rs
#[cfg(test)]
mod test;
