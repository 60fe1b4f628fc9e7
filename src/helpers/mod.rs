//! Logging helpers.
//!
//! # Data Flow
//! ```text
//! caller (logger: Option<&dyn Logger>, inputs)
//!     → with_logger (absent logger = no-op)
//!     → at most one Logger::log_kv call
//! ```
//!
//! # Design Decisions
//! - Every helper is stateless and synchronous (the `*_future` variants run on
//!   the caller's task)
//! - Absent loggers are handled in exactly one place: [`with_logger`]
//! - Helpers never fail because logging failed

use crate::logger::Logger;

pub mod conditional;
pub mod errors;
pub mod panic;
pub mod timing;

pub use conditional::{log_debug_if, log_error_if, log_if, log_info_if, log_warn_if};
pub use errors::{check_error, fatal_on_error, log_error, must, LogResultExt};
pub use panic::{log_panic, log_panic_as_error, log_panic_as_error_async, PanicError};
pub use timing::{time_function, time_future, timer};

/// Runs `emit` against the logger when one is present.
#[inline]
pub(crate) fn with_logger<'a, F>(logger: Option<&'a dyn Logger>, emit: F)
where
    F: FnOnce(&'a dyn Logger),
{
    if let Some(logger) = logger {
        emit(logger);
    }
}
