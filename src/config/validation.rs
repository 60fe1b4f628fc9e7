//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use super::schema::ServiceConfig;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("service.name must not be empty")]
    EmptyServiceName,

    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("logging.level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLevel(String),

    #[error("logging.filter {0:?} is not a valid filter directive")]
    InvalidFilter(String),
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.service.name.trim().is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLevel(config.logging.level.clone()));
    }

    if let Some(filter) = &config.logging.filter {
        if EnvFilter::try_new(filter).is_err() {
            errors.push(ValidationError::InvalidFilter(filter.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ServiceConfig::default();
        config.service.name = "  ".to_string();
        config.listener.bind_address = "localhost".to_string();
        config.logging.level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyServiceName,
                ValidationError::InvalidBindAddress("localhost".to_string()),
                ValidationError::UnknownLevel("verbose".to_string()),
            ]
        );
    }

    #[test]
    fn test_level_outside_known_set_is_rejected() {
        let mut config = ServiceConfig::default();
        config.logging.level = "off".to_string();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UnknownLevel("off".to_string())])
        );

        config.logging.level = "WARN".to_string();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_invalid_filter() {
        let mut config = ServiceConfig::default();
        config.logging.filter = Some("logkit=notalevel".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidFilter(_)));
    }
}
