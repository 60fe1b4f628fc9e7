//! Panic interception.
//!
//! # Responsibilities
//! - Run a closure (or future) under `catch_unwind`
//! - Log the panic payload with the operation name
//! - Re-raise the panic (`log_panic`) or turn it into an error
//!   (`log_panic_as_error`)
//!
//! # Design Decisions
//! - Interception does not depend on a logger; only the record does
//! - The closure is wrapped in `AssertUnwindSafe`: callers that resume after
//!   a swallowed panic own the consistency of whatever the closure touched

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt;
use thiserror::Error;

use super::timing::OPERATION_KEY;
use super::with_logger;
use crate::logger::{Field, Level, Logger};

pub const PANIC_KEY: &str = "panic";

/// A panic that was intercepted and swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("panic in {operation}: {message}")]
pub struct PanicError {
    pub operation: String,
    pub message: String,
}

/// Text of a panic payload as produced by `panic!`.
pub(crate) fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn record_panic(logger: Option<&dyn Logger>, msg: &str, operation: &str, message: &str) {
    with_logger(logger, |l| {
        l.log_kv(
            Level::Error,
            msg,
            &[
                Field::new(OPERATION_KEY, operation),
                Field::new(PANIC_KEY, message),
            ],
        )
    });
}

/// Run `f`; if it panics, log the payload and resume the same panic.
pub fn log_panic<R>(logger: Option<&dyn Logger>, operation: &str, f: impl FnOnce() -> R) -> R {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) => {
            record_panic(
                logger,
                "Panic intercepted",
                operation,
                &payload_message(&*payload),
            );
            panic::resume_unwind(payload)
        }
    }
}

/// Run `f`; if it panics, log the payload and return it as a [`PanicError`].
pub fn log_panic_as_error<R>(
    logger: Option<&dyn Logger>,
    operation: &str,
    f: impl FnOnce() -> R,
) -> Result<R, PanicError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| recovered(logger, operation, payload))
}

/// Async counterpart of [`log_panic_as_error`].
pub async fn log_panic_as_error_async<F>(
    logger: Option<&dyn Logger>,
    operation: &str,
    fut: F,
) -> Result<F::Output, PanicError>
where
    F: Future,
{
    AssertUnwindSafe(fut)
        .catch_unwind()
        .await
        .map_err(|payload| recovered(logger, operation, payload))
}

fn recovered(
    logger: Option<&dyn Logger>,
    operation: &str,
    payload: Box<dyn Any + Send>,
) -> PanicError {
    let message = payload_message(&*payload);
    record_panic(logger, "Panic recovered", operation, &message);
    PanicError {
        operation: operation.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::CaptureLogger;

    #[test]
    fn test_payload_message() {
        let s: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(payload_message(&*s), "static");

        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(payload_message(&*owned), "owned");

        let other: Box<dyn Any + Send> = Box::new(17u32);
        assert_eq!(payload_message(&*other), "non-string panic payload");
    }

    #[test]
    fn test_log_panic_as_error_swallows() {
        let logger = CaptureLogger::new();
        let result: Result<(), PanicError> =
            log_panic_as_error(Some(&logger), "worker", || panic!("test panic"));

        let err = result.unwrap_err();
        assert_eq!(err.operation, "worker");
        assert_eq!(err.message, "test panic");
        assert_eq!(err.to_string(), "panic in worker: test panic");

        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Error);
        assert_eq!(records[0].field(OPERATION_KEY).and_then(|v| v.as_str()), Some("worker"));
        assert_eq!(records[0].field(PANIC_KEY).and_then(|v| v.as_str()), Some("test panic"));
    }

    #[test]
    fn test_log_panic_as_error_without_logger_still_swallows() {
        let result: Result<(), PanicError> =
            log_panic_as_error(None, "worker", || panic!("formatted {}", 7));
        assert_eq!(result.unwrap_err().message, "formatted 7");
    }

    #[test]
    fn test_normal_return_is_not_logged() {
        let logger = CaptureLogger::new();
        assert_eq!(log_panic_as_error(Some(&logger), "ok", || 5), Ok(5));
        assert_eq!(log_panic(Some(&logger), "ok", || "fine"), "fine");
        assert!(logger.is_empty());
    }

    #[test]
    fn test_log_panic_resumes_unwind() {
        let logger = CaptureLogger::new();
        let outer = panic::catch_unwind(AssertUnwindSafe(|| {
            log_panic(Some(&logger), "handler", || panic!("test panic"))
        }));

        let payload = outer.unwrap_err();
        assert_eq!(payload_message(&*payload), "test panic");

        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "Panic intercepted");
        assert_eq!(records[0].field(PANIC_KEY).and_then(|v| v.as_str()), Some("test panic"));
    }

    #[test]
    fn test_log_panic_without_logger_resumes_same_payload() {
        let outer = panic::catch_unwind(AssertUnwindSafe(|| {
            log_panic(None, "op", || panic!("p"))
        }));

        let payload = outer.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"p"));
    }

    #[tokio::test]
    async fn test_async_panic_is_recovered() {
        let logger = CaptureLogger::new();
        let result: Result<(), PanicError> =
            log_panic_as_error_async(Some(&logger), "job", async { panic!("async boom") })
                .await;

        assert_eq!(result.unwrap_err().message, "async boom");
        assert_eq!(logger.records_at(Level::Error).len(), 1);

        let ok = log_panic_as_error_async(Some(&logger), "job", async { 9 }).await;
        assert_eq!(ok, Ok(9));
    }
}
