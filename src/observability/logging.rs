//! Structured logging initialisation.
//!
//! # Responsibilities
//! - Build the `EnvFilter` from `RUST_LOG` or the configured directive
//! - Install the global subscriber (pretty or JSON `fmt` layer)

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::Error;

/// Filter from `RUST_LOG`, falling back to the configured directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, Error> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.directive()))
        .map_err(|e| Error::Subscriber(e.to_string()))
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Error> {
    let registry = tracing_subscriber::registry().with(build_filter(config)?);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(config.with_target))
            .try_init(),
    };

    installed.map_err(|e| Error::Subscriber(e.to_string()))
}
