//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the demo service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name and version reported at startup and shutdown.
    pub service: ServiceInfo,

    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Logging backend settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Output format of the `fmt` layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    pub level: String,

    /// Output format.
    pub format: LogFormat,

    /// Full `EnvFilter` directive; overrides `level` when set.
    pub filter: Option<String>,

    /// Include the event target (module path) in output.
    pub with_target: bool,
}

impl LoggingConfig {
    /// Directive handed to `EnvFilter` when `RUST_LOG` is not set.
    pub fn directive(&self) -> &str {
        self.filter.as_deref().unwrap_or(&self.level)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            filter: None,
            with_target: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_prefers_filter() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.directive(), "info");

        config.filter = Some("logkit=trace".to_string());
        assert_eq!(config.directive(), "logkit=trace");
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.service.name, "logkit");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }
}
