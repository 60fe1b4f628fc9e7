//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by logger backends and ambient setup.
///
/// The helpers themselves never return this type: a failing logger is
/// ignored by every helper.
#[derive(Debug, Error)]
pub enum Error {
    /// Flushing buffered log output failed.
    #[error("failed to flush log output: {0}")]
    Flush(#[from] std::io::Error),

    /// A global tracing subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
