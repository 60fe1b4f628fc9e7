//! Startup logging.

use crate::helpers::with_logger;
use crate::logger::{Field, Level, Logger};

/// Log one info record announcing the application start.
pub fn log_startup(logger: Option<&dyn Logger>, app_name: &str, version: &str, port: u16) {
    with_logger(logger, |l| {
        l.log_kv(
            Level::Info,
            "Application starting",
            &[
                Field::new("app", app_name),
                Field::new("version", version),
                Field::new("port", port),
            ],
        )
    });
}
