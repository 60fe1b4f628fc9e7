//! Operation timing.
//!
//! Every timing helper emits the same info record:
//! `"Operation completed" operation=<name> duration_ms=<whole ms>`.

use std::future::Future;
use std::time::{Duration, Instant};

use super::with_logger;
use crate::logger::{Field, Level, Logger};

pub const OPERATION_KEY: &str = "operation";
pub const DURATION_KEY: &str = "duration_ms";

/// Sub-millisecond precision is truncated.
pub(crate) fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn log_duration(logger: Option<&dyn Logger>, operation: &str, elapsed: Duration) {
    with_logger(logger, |l| {
        l.log_kv(
            Level::Info,
            "Operation completed",
            &[
                Field::new(OPERATION_KEY, operation),
                Field::new(DURATION_KEY, duration_ms(elapsed)),
            ],
        )
    });
}

/// Logs the elapsed time when dropped, including during unwinding.
struct Stopwatch<'a> {
    logger: Option<&'a dyn Logger>,
    operation: &'a str,
    started: Instant,
}

impl<'a> Stopwatch<'a> {
    fn start(logger: Option<&'a dyn Logger>, operation: &'a str) -> Self {
        Self {
            logger,
            operation,
            started: Instant::now(),
        }
    }
}

impl Drop for Stopwatch<'_> {
    fn drop(&mut self) {
        log_duration(self.logger, self.operation, self.started.elapsed());
    }
}

/// Start timing `operation`; call the returned closure to log the duration.
///
/// Each call logs the time since `timer` was called, so calling twice logs
/// two records with growing durations.
pub fn timer<'a>(logger: Option<&'a dyn Logger>, operation: &'a str) -> impl Fn() + 'a {
    let started = Instant::now();
    move || log_duration(logger, operation, started.elapsed())
}

/// Run `f` once on the current thread and log how long it took.
///
/// The record is emitted even if `f` panics; the panic keeps propagating.
pub fn time_function<R>(
    logger: Option<&dyn Logger>,
    operation: &str,
    f: impl FnOnce() -> R,
) -> R {
    let _stopwatch = Stopwatch::start(logger, operation);
    f()
}

/// Await `fut` and log how long it took.
///
/// If the returned future is dropped before completion, the time until the
/// drop is logged.
pub async fn time_future<F>(logger: Option<&dyn Logger>, operation: &str, fut: F) -> F::Output
where
    F: Future,
{
    let _stopwatch = Stopwatch::start(logger, operation);
    fut.await
}
