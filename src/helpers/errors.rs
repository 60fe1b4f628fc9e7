//! Error logging.
//!
//! # Responsibilities
//! - Log an error when there is one (`log_error`)
//! - Report whether there was one, logged or not (`check_error`)
//! - Terminate the process on an error (`fatal_on_error` / `must`)
//!
//! # Design Decisions
//! - The error text is appended after the caller's fields under `error`
//! - Whether an error occurred never depends on whether a logger is present
//! - Termination never depends on whether a logger is present

use std::error::Error as StdError;
use std::fmt::Display;

use super::with_logger;
use crate::logger::{Field, Level, Logger, FATAL_EXIT_CODE};

/// Field name carrying the error text.
pub const ERROR_KEY: &str = "error";

fn with_error(fields: &[Field], text: String) -> Vec<Field> {
    let mut all = Vec::with_capacity(fields.len() + 1);
    all.extend_from_slice(fields);
    all.push(Field::new(ERROR_KEY, text));
    all
}

fn emit(logger: Option<&dyn Logger>, level: Level, msg: &str, fields: &[Field], text: String) {
    with_logger(logger, |l| l.log_kv(level, msg, &with_error(fields, text)));
}

/// Emit one error-level record if `err` is present.
pub fn log_error(
    logger: Option<&dyn Logger>,
    err: Option<&dyn StdError>,
    msg: &str,
    fields: &[Field],
) {
    if let Some(err) = err {
        emit(logger, Level::Error, msg, fields, err.to_string());
    }
}

/// Like [`log_error`], and returns whether `err` was present.
///
/// The return value is `true` for any error even when no logger was given.
pub fn check_error(
    logger: Option<&dyn Logger>,
    err: Option<&dyn StdError>,
    msg: &str,
    fields: &[Field],
) -> bool {
    log_error(logger, err, msg, fields);
    err.is_some()
}

/// Emit a fatal record and exit the process if `err` is present.
///
/// Exits with status 1 whether or not a logger was given. The logger is
/// synced before exiting; a failing sync does not prevent the exit.
pub fn fatal_on_error(
    logger: Option<&dyn Logger>,
    err: Option<&dyn StdError>,
    msg: &str,
    fields: &[Field],
) {
    if let Some(err) = err {
        exit_fatal(logger, msg, fields, err.to_string());
    }
}

/// Alias of [`fatal_on_error`].
pub fn must(
    logger: Option<&dyn Logger>,
    err: Option<&dyn StdError>,
    msg: &str,
    fields: &[Field],
) {
    fatal_on_error(logger, err, msg, fields)
}

fn exit_fatal(logger: Option<&dyn Logger>, msg: &str, fields: &[Field], text: String) -> ! {
    with_logger(logger, |l| {
        l.log_kv(Level::Fatal, msg, &with_error(fields, text));
        let _ = l.sync();
    });
    std::process::exit(FATAL_EXIT_CODE)
}

/// Logging adapters for `Result`.
pub trait LogResultExt<T> {
    /// Log the error (as [`log_error`] would) and hand the result back.
    fn log_err(self, logger: Option<&dyn Logger>, msg: &str) -> Self;

    /// Unwrap the value, or log a fatal record and exit.
    fn or_fatal(self, logger: Option<&dyn Logger>, msg: &str) -> T;
}

impl<T, E: Display> LogResultExt<T> for Result<T, E> {
    fn log_err(self, logger: Option<&dyn Logger>, msg: &str) -> Self {
        if let Err(err) = &self {
            emit(logger, Level::Error, msg, &[], err.to_string());
        }
        self
    }

    fn or_fatal(self, logger: Option<&dyn Logger>, msg: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => exit_fatal(logger, msg, &[], err.to_string()),
        }
    }
}
