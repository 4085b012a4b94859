//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument or its environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! A missing or malformed TOML file never stops the service; the caller logs
//! a warning and carries on with defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PERSISTENCE_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub persistence_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

/// Values supplied on the command line (or through their env fallbacks)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub persistence_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Upper bound for a single persistence call
    pub persistence_timeout: Duration,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: default_database_path(),
            persistence_timeout: Duration::from_millis(DEFAULT_PERSISTENCE_TIMEOUT_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Merge overrides, TOML values and defaults, first present wins
    pub fn resolve(overrides: Overrides, file: Option<TomlConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let timeout_ms = overrides
            .persistence_timeout_ms
            .or(file.persistence_timeout_ms)
            .filter(|ms| *ms > 0);

        Self {
            host: overrides.host.or(file.host).unwrap_or(defaults.host),
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            database_path: overrides
                .database
                .or(file.database)
                .unwrap_or(defaults.database_path),
            persistence_timeout: timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.persistence_timeout),
            log_level: overrides
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        }
    }

    /// `host:port` for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
}

/// Locate the config file for this platform
///
/// Linux tries `~/.config/mcat/config.toml` then `/etc/mcat/config.toml`;
/// other platforms use the user config directory only.
pub fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("mcat").join("config.toml"));

    if let Some(path) = user_config.filter(|p| p.exists()) {
        return Some(path);
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/mcat/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// OS-dependent default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("mcat"))
        .unwrap_or_else(|| PathBuf::from("./mcat_data"))
        .join("mcat.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::resolve(Overrides::default(), None);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 8080);
        assert_eq!(config.persistence_timeout, Duration::from_millis(5000));
        assert!(config.database_path.ends_with("mcat.db"));
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let overrides = Overrides {
            persistence_timeout_ms: Some(0),
            ..Default::default()
        };
        let config = ServiceConfig::resolve(overrides, None);
        assert_eq!(
            config.persistence_timeout,
            Duration::from_millis(DEFAULT_PERSISTENCE_TIMEOUT_MS)
        );
    }

    #[test]
    fn test_bind_address() {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }
}
