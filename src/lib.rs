//! Structured logging helpers.
//!
//! Small helpers over a [`Logger`] capability: conditional logging, error
//! logging, timing, HTTP request/response logging, request-scoped loggers,
//! panic interception and startup/shutdown records. Every helper accepts an
//! absent logger and then does nothing.
//!
//! ```
//! use logkit::{fields, helpers, CaptureLogger, Level};
//!
//! let logger = CaptureLogger::new();
//! helpers::log_info_if(Some(&logger), true, "Cache warmed", &fields!["entries" => 12]);
//! helpers::log_info_if(None, true, "Nobody is listening", &[]);
//!
//! assert_eq!(logger.records_at(Level::Info).len(), 1);
//! ```

// Core
pub mod error;
pub mod helpers;
pub mod logger;

// Surfaces
pub mod http;
pub mod lifecycle;

// Ambient
pub mod config;
pub mod observability;

pub use error::Error;
pub use helpers::{
    check_error, fatal_on_error, log_debug_if, log_error, log_error_if, log_if, log_info_if,
    log_panic, log_panic_as_error, log_panic_as_error_async, log_warn_if, must, time_function,
    time_future, timer, LogResultExt, PanicError,
};
pub use http::{log_http_request, log_http_response, with_request_id, RequestScopedLogger};
pub use lifecycle::{log_shutdown, log_startup};
pub use logger::{CaptureLogger, Field, Level, Logger, NopLogger, Record};
pub use observability::TracingLogger;
