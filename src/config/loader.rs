//! Configuration Loader
//!
//! Merges configuration sources, highest priority first:
//! 1. Environment variables
//! 2. Config file (config.toml / config.local.toml)
//! 3. Defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::Load(err.to_string())
    }
}

/// Config file search names, without extension.
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Environment variables use the `TAPROOM_` prefix with `__` as the section
/// separator, e.g. `TAPROOM_SERVER__PORT=9000`,
/// `TAPROOM_DATABASE__PATH=/data/taproom.db`, `TAPROOM_SERVER__DEBUG=true`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load configuration from an explicit file path, or the default search
/// paths when `config_path` is `None`.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.debug", false)?
        .set_default("database.path", "data/taproom.db")?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("TAPROOM")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Parse(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::Validation(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.path.is_empty() {
        return Err(ConfigError::Validation(
            "Database path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Log the effective configuration at startup.
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Debug mode: {}", config.server.debug);
    tracing::info!("Database: {}", config.database.path);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_path() {
        let mut config = AppConfig::default();
        config.database.path = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\ndebug = true\n\n[database]\npath = \"beers.db\"\n"
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.server.debug);
        assert_eq!(config.database.path, "beers.db");
        // untouched sections keep their defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.log.level, "info");
    }
}
