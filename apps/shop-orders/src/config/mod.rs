//! Configuration module for shop-orders.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before use.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shop_orders::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! let service = config.query.service();
//! ```
//!
//! # Example
//!
//! ```yaml
//! database:
//!   url: ${DATABASE_URL:-sqlite://shop.db}
//!   max_connections: 5
//! query:
//!   name_match: contains     # contains | pattern
//!   ordering: storage        # storage | id_ascending
//! observability:
//!   logging:
//!     level: info
//!     format: json           # json | pretty
//! ```

mod database;
mod observability;
mod query;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use database::DatabaseConfig;
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use query::QueryConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Order search configuration.
    #[serde(default)]
    pub query: QueryConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let database = &config.database;

    if database.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "database.url must not be empty".to_string(),
        ));
    }

    if database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be positive".to_string(),
        ));
    }

    if database.acquire_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "database.acquire_timeout_secs must be positive".to_string(),
        ));
    }

    let level = &config.observability.logging.level;
    if tracing_subscriber::EnvFilter::try_new(level).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level is not a valid filter: {level}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::query::{NameMatch, ResultOrdering};
    use std::io::Write;

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = load_config_from_string("{}").unwrap();
        assert_eq!(config.database, DatabaseConfig::default());
        assert_eq!(config.query, QueryConfig::default());
        assert_eq!(config.observability.logging.level, "info");
        assert_eq!(config.observability.logging.format, LogFormat::Json);
    }

    #[test]
    fn parses_all_sections() {
        let yaml = r#"
database:
  url: "sqlite::memory:"
  max_connections: 2
  acquire_timeout_secs: 3
query:
  name_match: pattern
  ordering: id_ascending
observability:
  logging:
    level: debug
    format: pretty
"#;
        let config = load_config_from_string(yaml).unwrap();
        assert!(config.database.is_in_memory());
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.database.acquire_timeout_secs, 3);
        assert_eq!(config.query.name_match, NameMatch::Pattern);
        assert_eq!(config.query.ordering, ResultOrdering::IdAscending);
        assert_eq!(config.observability.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn interpolates_default_when_var_unset() {
        let yaml = "database:\n  url: ${SHOP_ORDERS_TEST_UNSET_URL:-sqlite://fallback.db}\n";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.database.url, "sqlite://fallback.db");
    }

    #[test]
    fn interpolates_path_variable() {
        // PATH is set in every test environment and never empty.
        let path = std::env::var("PATH").unwrap();
        assert_eq!(interpolate_env_vars("${PATH}"), path);
        assert_eq!(interpolate_env_vars("plain text"), "plain text");
    }

    #[test]
    fn rejects_zero_connections() {
        let err = load_config_from_string("database:\n  max_connections: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(msg) if msg.contains("max_connections")));
    }

    #[test]
    fn rejects_unknown_name_match() {
        let err = load_config_from_string("query:\n  name_match: fuzzy\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn rejects_invalid_log_level() {
        let err = load_config_from_string("observability:\n  logging:\n    level: shop=loud\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "query:\n  ordering: id_ascending").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.query.ordering, ResultOrdering::IdAscending);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_config(Some("/nonexistent/shop-orders.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
