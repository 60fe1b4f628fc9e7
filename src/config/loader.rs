//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::schema::ServiceConfig;
use super::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [service]
            name = "orders"
            version = "2.1.0"

            [listener]
            bind_address = "127.0.0.1:9000"

            [logging]
            level = "debug"
            format = "json"
            with_target = false
            "#,
        )
        .unwrap();

        assert_eq!(config.service.name, "orders");
        assert_eq!(config.service.version, "2.1.0");
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.logging.with_target);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[logging\nlevel = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().starts_with("Validation failed: logging.level"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/logkit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
