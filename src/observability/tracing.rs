//! `tracing` backend for the [`Logger`] trait.
//!
//! Level mapping: debug, info, warn and error map one to one; fatal and
//! panic are emitted at ERROR with a `severity` field. Keyed fields are
//! rendered into a single `fields` value as `key=value` pairs.

use std::fmt;

use crate::logger::field::DisplayFields;
use crate::logger::{Field, Level, Logger};

/// Logger that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

fn emit_plain(level: Level, msg: &str) {
    match level {
        Level::Debug => tracing::debug!("{}", msg),
        Level::Info => tracing::info!("{}", msg),
        Level::Warn => tracing::warn!("{}", msg),
        Level::Error => tracing::error!("{}", msg),
        Level::Fatal => tracing::error!(severity = "fatal", "{}", msg),
        Level::Panic => tracing::error!(severity = "panic", "{}", msg),
    }
}

fn emit_keyed(level: Level, msg: &str, fields: &[Field]) {
    let fields = DisplayFields(fields);
    match level {
        Level::Debug => tracing::debug!(fields = %fields, "{}", msg),
        Level::Info => tracing::info!(fields = %fields, "{}", msg),
        Level::Warn => tracing::warn!(fields = %fields, "{}", msg),
        Level::Error => tracing::error!(fields = %fields, "{}", msg),
        Level::Fatal => tracing::error!(severity = "fatal", fields = %fields, "{}", msg),
        Level::Panic => tracing::error!(severity = "panic", fields = %fields, "{}", msg),
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, msg: &str) {
        emit_plain(level, msg);
    }

    fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        emit_plain(level, &args.to_string());
    }

    fn log_kv(&self, level: Level, msg: &str, fields: &[Field]) {
        if fields.is_empty() {
            emit_plain(level, msg);
        } else {
            emit_keyed(level, msg, fields);
        }
    }
}
