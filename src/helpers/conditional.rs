//! Conditional logging.
//!
//! The condition is evaluated by the caller before the call; these helpers
//! only decide whether to emit.

use super::with_logger;
use crate::logger::{Field, Level, Logger};

/// Emit a keyed record at `level` iff `condition` holds and a logger is present.
pub fn log_if(
    logger: Option<&dyn Logger>,
    level: Level,
    condition: bool,
    msg: &str,
    fields: &[Field],
) {
    if !condition {
        return;
    }
    with_logger(logger, |l| l.log_kv(level, msg, fields));
}

pub fn log_debug_if(logger: Option<&dyn Logger>, condition: bool, msg: &str, fields: &[Field]) {
    log_if(logger, Level::Debug, condition, msg, fields)
}

pub fn log_info_if(logger: Option<&dyn Logger>, condition: bool, msg: &str, fields: &[Field]) {
    log_if(logger, Level::Info, condition, msg, fields)
}

pub fn log_warn_if(logger: Option<&dyn Logger>, condition: bool, msg: &str, fields: &[Field]) {
    log_if(logger, Level::Warn, condition, msg, fields)
}

pub fn log_error_if(logger: Option<&dyn Logger>, condition: bool, msg: &str, fields: &[Field]) {
    log_if(logger, Level::Error, condition, msg, fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::CaptureLogger;

    #[test]
    fn test_emits_only_when_condition_holds() {
        let logger = CaptureLogger::new();
        let fields = crate::fields!["user" => "alice"];

        log_info_if(Some(&logger), true, "logged", &fields);
        log_info_if(Some(&logger), false, "skipped", &fields);

        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].message, "logged");
        assert_eq!(records[0].field("user").and_then(|v| v.as_str()), Some("alice"));
    }

    #[test]
    fn test_each_variant_uses_its_level() {
        let logger = CaptureLogger::new();
        log_debug_if(Some(&logger), true, "d", &[]);
        log_info_if(Some(&logger), true, "i", &[]);
        log_warn_if(Some(&logger), true, "w", &[]);
        log_error_if(Some(&logger), true, "e", &[]);

        let levels: Vec<Level> = logger.records().iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![Level::Debug, Level::Info, Level::Warn, Level::Error]);
    }

    #[test]
    fn test_absent_logger_is_noop() {
        log_error_if(None, true, "nobody listens", &crate::fields!["k" => 1]);
        log_warn_if(None, false, "nobody listens", &[]);
    }
}
