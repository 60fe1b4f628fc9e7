//! Logger that discards every record.

use super::{Field, Level, Logger};

/// Sentinel logger for call sites that must hold a logger but have none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn log(&self, _level: Level, _msg: &str) {}

    fn log_kv(&self, _level: Level, _msg: &str, _fields: &[Field]) {}
}
