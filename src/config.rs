//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. With no
//! file and no variables the board reads the hard-coded feed.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::endpoint::{DEFAULT_BASE_URL, DEFAULT_LOCATION_ID};
use crate::loader::LoaderConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Appointment feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_location_id")]
    pub location_id: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_location_id() -> String {
    DEFAULT_LOCATION_ID.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            location_id: default_location_id(),
            timeout_secs: default_timeout(),
        }
    }
}

impl From<&SourceConfig> for LoaderConfig {
    fn from(source: &SourceConfig) -> Self {
        LoaderConfig {
            base_url: source.url.clone(),
            location_id: source.location_id.clone(),
            request_timeout_ms: source.timeout_secs.saturating_mul(1000),
        }
    }
}

/// Host shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("queueboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Explicit path if given (errors are fatal), otherwise the default search
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Loader settings derived from the source section
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::from(&self.source)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Source overrides
        if let Some(url) = var("QUEUEBOARD_URL") {
            self.source.url = url;
        }
        if let Some(location_id) = var("QUEUEBOARD_LOCATION_ID") {
            self.source.location_id = location_id;
        }
        if let Some(timeout) = var("QUEUEBOARD_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.source.timeout_secs = secs;
            }
        }

        // Server overrides
        if let Some(host) = var("QUEUEBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("QUEUEBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = var("QUEUEBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("QUEUEBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Queue Board Configuration
#
# Environment variables override these settings:
# - QUEUEBOARD_URL
# - QUEUEBOARD_LOCATION_ID
# - QUEUEBOARD_TIMEOUT_SECS
# - QUEUEBOARD_HOST
# - QUEUEBOARD_PORT
# - QUEUEBOARD_LOG_LEVEL
# - QUEUEBOARD_LOG_FORMAT

[source]
# Queue board feed, without the location query
url = "{url}"

# Store location to show
location_id = "{location_id}"

# Give up on the feed after this many seconds
timeout_secs = {timeout}

[server]
# Host shell bind address
host = "{host}"
port = {port}

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        url = DEFAULT_BASE_URL,
        location_id = DEFAULT_LOCATION_ID,
        timeout = default_timeout(),
        host = default_host(),
        port = default_port(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.url, DEFAULT_BASE_URL);
        assert_eq!(config.source.location_id, "422");
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.server.addr(), "127.0.0.1:8090");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.source.url, DEFAULT_BASE_URL);
        assert_eq!(config.source.location_id, DEFAULT_LOCATION_ID);
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nlocation_id = \"17\"\n\n[server]\nport = 9000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.source.location_id, "17");
        assert_eq!(config.source.url, DEFAULT_BASE_URL);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a port\"").unwrap();
        let invalid = Config::load(file.path()).unwrap_err();
        assert!(matches!(invalid, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("QUEUEBOARD_URL", "http://localhost:9999/feed"),
            ("QUEUEBOARD_LOCATION_ID", "99"),
            ("QUEUEBOARD_TIMEOUT_SECS", "5"),
            ("QUEUEBOARD_PORT", "not-a-number"),
            ("QUEUEBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.source.url, "http://localhost:9999/feed");
        assert_eq!(config.source.location_id, "99");
        assert_eq!(config.source.timeout_secs, 5);
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_loader_config() {
        let mut config = Config::default();
        config.source.location_id = "12".to_string();
        config.source.timeout_secs = 3;

        let loader = config.loader_config();
        assert_eq!(loader.request_timeout_ms, 3000);
        assert!(loader.url().ends_with("?locationId=12"));
    }
}
