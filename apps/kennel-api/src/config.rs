//! # API Configuration
//!
//! Server and logging settings for the kennel API.
//!
//! ## Load Order (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults              0.0.0.0:8080, level "info", pretty output    │
//! │  2. TOML file             path from KENNEL_CONFIG (skipped if absent)  │
//! │  3. Environment           KENNEL_BIND_ADDR, KENNEL_PORT,               │
//! │                           KENNEL_LOG_LEVEL, KENNEL_LOG_FORMAT          │
//! │  4. validate()                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Configuration
//! ```toml
//! # kennel.toml
//! [server]
//! bind_addr = "127.0.0.1"
//! port = 3000
//!
//! [log]
//! level = "kennel_store=debug,info"
//! format = "json"
//! ```

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "KENNEL_CONFIG";

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Log Format
// =============================================================================

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human friendly.
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue("KENNEL_LOG_FORMAT".to_string())),
        }
    }
}

// =============================================================================
// Settings Sections
// =============================================================================

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("cannot bind to {}", self.bind_address())))
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

// =============================================================================
// API Config
// =============================================================================

/// Complete API configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl ApiConfig {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::load_with(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Loads configuration from an optional file and an environment lookup.
    pub fn load_with<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };

        config.apply_env_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("port must be greater than 0".into()));
        }

        self.server.socket_addr()?;

        EnvFilter::try_new(&self.log.level).map_err(|e| {
            ConfigError::Invalid(format!("unknown log level {:?}: {}", self.log.level, e))
        })?;

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = env("KENNEL_BIND_ADDR") {
            self.server.bind_addr = addr;
        }

        if let Some(port) = env("KENNEL_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("KENNEL_PORT".to_string()))?;
        }

        if let Some(level) = env("KENNEL_LOG_LEVEL") {
            self.log.level = level;
        }

        if let Some(format) = env("KENNEL_LOG_FORMAT") {
            self.log.format = format.parse()?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "kennel-config-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::load_with(None, env_from(&[])).unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_env_overrides() {
        let config = ApiConfig::load_with(
            None,
            env_from(&[
                ("KENNEL_BIND_ADDR", "127.0.0.1"),
                ("KENNEL_PORT", "3000"),
                ("KENNEL_LOG_LEVEL", "debug"),
                ("KENNEL_LOG_FORMAT", "JSON"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.socket_addr().unwrap().port(), 3000);
        assert_eq!(config.server.bind_addr, "127.0.0.1");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_unparsable_env_names_variable() {
        let err = ApiConfig::load_with(None, env_from(&[("KENNEL_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == "KENNEL_PORT"));

        let err =
            ApiConfig::load_with(None, env_from(&[("KENNEL_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == "KENNEL_LOG_FORMAT"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ApiConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = ApiConfig::default();
        config.server.bind_addr = "not an address".to_string();
        assert!(config.validate().is_err());

        let mut config = ApiConfig::default();
        config.log.level = "kennel=verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_then_env() {
        let path = temp_config(
            "layered",
            "[server]\nport = 9000\n\n[log]\nformat = \"compact\"\n",
        );

        let config =
            ApiConfig::load_with(Some(&path), env_from(&[("KENNEL_PORT", "9100")])).unwrap();
        std::fs::remove_file(&path).ok();

        // bind_addr falls back to its default inside a partial section
        assert_eq!(config.server.bind_addr, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.log.format, LogFormat::Compact);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("kennel-config-does-not-exist.toml");
        let config = ApiConfig::load_with(Some(&path), env_from(&[])).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_malformed_file() {
        let path = temp_config("broken", "[server\nport = ");
        let err = ApiConfig::load_with(Some(&path), env_from(&[])).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
