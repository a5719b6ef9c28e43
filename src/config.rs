//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source dataset locations
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_shipments_path")]
    pub shipments_path: PathBuf,

    #[serde(default = "default_boundaries_path")]
    pub boundaries_path: PathBuf,
}

fn default_shipments_path() -> PathBuf {
    PathBuf::from("data_input/shipping_clean.csv")
}

fn default_boundaries_path() -> PathBuf {
    PathBuf::from("data_cache/Indonesia_provinces.geojson")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            shipments_path: default_shipments_path(),
            boundaries_path: default_boundaries_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8086
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
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

    pub file: Option<String>,
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
            file: None,
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
        // Try default config locations
        let config_paths = [
            dirs::config_dir().map(|p| p.join("shipdash").join("config.toml")),
            Some(PathBuf::from("/etc/shipdash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Dataset overrides
        if let Ok(path) = std::env::var("SHIPDASH_SHIPMENTS") {
            self.data.shipments_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("SHIPDASH_BOUNDARIES") {
            self.data.boundaries_path = PathBuf::from(path);
        }

        // Server overrides
        if let Ok(host) = std::env::var("SHIPDASH_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SHIPDASH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("SHIPDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SHIPDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
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
    r#"# Shipdash Configuration
#
# Environment variables override these settings:
# - SHIPDASH_SHIPMENTS
# - SHIPDASH_BOUNDARIES
# - SHIPDASH_HOST
# - SHIPDASH_PORT
# - SHIPDASH_LOG_LEVEL
# - SHIPDASH_LOG_FORMAT

[data]
# Pre-cleaned shipment records (CSV)
shipments_path = "data_input/shipping_clean.csv"

# Province boundary dataset (GeoJSON, NAME_1 name property)
boundaries_path = "data_cache/Indonesia_provinces.geojson"

[server]
# HTTP server host
host = "0.0.0.0"

# HTTP server port
port = 8086

# Allowed CORS origins (empty = permissive)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/shipdash/shipdash.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.port, 8086);
        assert_eq!(
            config.data.shipments_path,
            PathBuf::from("data_input/shipping_clean.csv")
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[data]
shipments_path = "/srv/data/shipping.csv"

[server]
port = 9000
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(
            config.data.shipments_path,
            PathBuf::from("/srv/data/shipping.csv")
        );
        // Unset fields fall back to defaults
        assert_eq!(config.data.boundaries_path, default_boundaries_path());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not valid toml [[").unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_generated_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8086);
    }

    #[test]
    fn test_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8086,
            cors_origins: Vec::new(),
        };
        assert_eq!(config.addr(), "127.0.0.1:8086");
    }
}
