//! # API Configuration
//!
//! Configuration is an explicit [`AppConfig`] value built once in `main` and
//! handed to whatever needs it. Nothing reads configuration from globals.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOCKPILE_PORT=9000                                                │
//! │     STOCKPILE_DATABASE_PATH=/var/lib/stockpile/stockpile.db            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $STOCKPILE_CONFIG, or ./stockpile.toml if it exists                │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:8080, ./stockpile.db                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [database]
//! path = "stockpile.db"
//! max_connections = 5
//! run_migrations = true
//!
//! [logging]
//! filter = "info,stockpile_db=debug"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stockpile_db::DbConfig;
use tracing::{debug, info};

/// Config file read when `STOCKPILE_CONFIG` is unset and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "stockpile.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "STOCKPILE_CONFIG";

// =============================================================================
// Settings
// =============================================================================

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address (default: 0.0.0.0).
    pub host: String,
    /// Port to listen on (default: 8080).
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file path, or `:memory:`.
    pub path: PathBuf,
    /// Maximum pool size.
    pub max_connections: u32,
    /// Apply pending migrations at startup.
    pub run_migrations: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: PathBuf::from("stockpile.db"),
            max_connections: 5,
            run_migrations: true,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: "info".to_string(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete process configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads configuration from file, process environment, and defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `env` to look up environment variables.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match env(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(&env)?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file. Missing sections and keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&contents)
    }

    /// Parses TOML config text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `STOCKPILE_*` overrides.
    fn apply_env_overrides(
        &mut self,
        env: &impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = env("STOCKPILE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_var(env, "STOCKPILE_PORT")? {
            self.server.port = port;
        }
        if let Some(path) = env("STOCKPILE_DATABASE_PATH") {
            self.database.path = PathBuf::from(path);
        }
        if let Some(max) = parse_var(env, "STOCKPILE_MAX_CONNECTIONS")? {
            self.database.max_connections = max;
        }
        if let Some(run) = parse_var(env, "STOCKPILE_RUN_MIGRATIONS")? {
            self.database.run_migrations = run;
        }
        if let Some(filter) = env("STOCKPILE_LOG") {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be greater than 0".into()));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be greater than 0".into(),
            ));
        }

        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("database.path must not be empty".into()));
        }

        Ok(())
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Builds the pool configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database.path)
            .max_connections(self.database.max_connections)
            .run_migrations(self.database.run_migrations)
    }
}

fn parse_var<T: FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match env(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.database.path, PathBuf::from("stockpile.db"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 9000

            [database]
            path = "/tmp/inventory.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, PathBuf::from("/tmp/inventory.db"));
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_env_overrides() {
        let env = env_of(&[
            ("STOCKPILE_HOST", "127.0.0.1"),
            ("STOCKPILE_PORT", "9100"),
            ("STOCKPILE_DATABASE_PATH", ":memory:"),
            ("STOCKPILE_MAX_CONNECTIONS", "2"),
            ("STOCKPILE_RUN_MIGRATIONS", "false"),
            ("STOCKPILE_LOG", "debug"),
        ]);
        let mut config = AppConfig::default();
        config.apply_env_overrides(&env).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9100");
        assert!(config.db_config().is_in_memory());
        assert_eq!(config.db_config().max_connections, 2);
        assert!(!config.db_config().run_migrations);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_bad_override_names_the_variable() {
        let env = env_of(&[("STOCKPILE_PORT", "eighty")]);
        let err = AppConfig::default().apply_env_overrides(&env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "STOCKPILE_PORT"));
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.database.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let env = env_of(&[(CONFIG_PATH_VAR, "/definitely/not/here/stockpile.toml")]);
        let err = AppConfig::load_with(env).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[server]"));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
