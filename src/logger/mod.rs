//! Logger capability consumed by every helper.
//!
//! # Data Flow
//! ```text
//! helper (info_if, log_error, timer, ...)
//!     → Logger::log_kv(level, msg, fields)
//!     → backend (TracingLogger, CaptureLogger, user type)
//! ```
//!
//! # Design Decisions
//! - Three primitive forms per call: plain, template (`fmt::Arguments`), keyed
//! - Per-level convenience methods are provided on top of the primitives,
//!   so decorators only override the primitives
//! - Object safe: helpers take `Option<&dyn Logger>`

use std::fmt;
use std::sync::Arc;

use crate::error::Error;

pub mod capture;
pub mod field;
pub mod nop;

pub use capture::{CaptureLogger, Record};
pub use field::Field;
pub use nop::NopLogger;

/// Exit status used when a fatal record terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates the plain, template and keyed convenience methods for one level.
macro_rules! leveled {
    ($level:expr, $plain:ident, $template:ident, $keyed:ident) => {
        fn $plain(&self, msg: &str) {
            self.log($level, msg)
        }

        fn $template(&self, args: fmt::Arguments<'_>) {
            self.log_fmt($level, args)
        }

        fn $keyed(&self, msg: &str, fields: &[Field]) {
            self.log_kv($level, msg, fields)
        }
    };
}

/// A structured, leveled logger.
///
/// Implementors provide the three primitives; everything else is derived.
pub trait Logger: Send + Sync {
    /// Emit a plain message.
    fn log(&self, level: Level, msg: &str);

    /// Emit a templated message.
    fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(msg) => self.log(level, msg),
            None => self.log(level, &args.to_string()),
        }
    }

    /// Emit a message with ordered key-value fields.
    fn log_kv(&self, level: Level, msg: &str, fields: &[Field]);

    /// Flush any buffered records.
    fn sync(&self) -> Result<(), Error> {
        Ok(())
    }

    leveled!(Level::Debug, debug, debug_fmt, debug_kv);
    leveled!(Level::Info, info, info_fmt, info_kv);
    leveled!(Level::Warn, warn, warn_fmt, warn_kv);
    leveled!(Level::Error, error, error_fmt, error_kv);

    /// Emit at fatal level, flush, and exit the process.
    fn fatal(&self, msg: &str) -> ! {
        self.log(Level::Fatal, msg);
        let _ = self.sync();
        std::process::exit(FATAL_EXIT_CODE)
    }

    fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.log_fmt(Level::Fatal, args);
        let _ = self.sync();
        std::process::exit(FATAL_EXIT_CODE)
    }

    fn fatal_kv(&self, msg: &str, fields: &[Field]) -> ! {
        self.log_kv(Level::Fatal, msg, fields);
        let _ = self.sync();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Emit at panic level, then panic with the message.
    fn panic(&self, msg: &str) -> ! {
        self.log(Level::Panic, msg);
        panic!("{}", msg)
    }

    fn panic_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        let msg = args.to_string();
        self.log(Level::Panic, &msg);
        panic!("{}", msg)
    }

    fn panic_kv(&self, msg: &str, fields: &[Field]) -> ! {
        self.log_kv(Level::Panic, msg, fields);
        panic!("{}", msg)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, msg: &str) {
        (**self).log(level, msg)
    }

    fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        (**self).log_fmt(level, args)
    }

    fn log_kv(&self, level: Level, msg: &str, fields: &[Field]) {
        (**self).log_kv(level, msg, fields)
    }

    fn sync(&self) -> Result<(), Error> {
        (**self).sync()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering_and_names() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Error < Level::Fatal);
        assert_eq!(Level::Warn.to_string(), "warn");
        assert_eq!(Level::Panic.as_str(), "panic");
    }

    #[test]
    fn test_convenience_methods_route_to_primitives() {
        let logger = CaptureLogger::new();
        logger.debug("plain");
        logger.info_fmt(format_args!("templated {}", 42));
        logger.warn_kv("keyed", &crate::fields!["k" => "v"]);
        logger.error("boom");

        let records = logger.records();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].level, Level::Debug);
        assert_eq!(records[1].message, "templated 42");
        assert_eq!(records[2].level, Level::Warn);
        assert_eq!(records[2].field("k").and_then(|v| v.as_str()), Some("v"));
        assert_eq!(records[3].level, Level::Error);
    }

    #[test]
    fn test_arc_logger_delegates() {
        let inner = Arc::new(CaptureLogger::new());
        let shared: Arc<dyn Logger> = inner.clone();
        shared.info("through arc");
        assert!(shared.sync().is_ok());

        assert_eq!(inner.len(), 1);
        assert_eq!(inner.sync_count(), 1);
    }

    #[test]
    #[should_panic(expected = "gave up")]
    fn test_panic_logs_then_panics() {
        let logger = CaptureLogger::new();
        logger.panic("gave up");
    }
}
