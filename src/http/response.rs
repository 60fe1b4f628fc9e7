//! Response logging.
//!
//! Level tiers by status code:
//! - `< 300`: info
//! - `300..400`: warn
//! - `>= 400`: error

use std::time::Duration;

use super::request::{request_fields, RequestDescriptor};
use crate::helpers::timing::{duration_ms, DURATION_KEY};
use crate::helpers::with_logger;
use crate::logger::{Field, Level, Logger};

/// Log level for a response with the given status code.
pub fn level_for_status(status: u16) -> Level {
    match status {
        0..=299 => Level::Info,
        300..=399 => Level::Warn,
        _ => Level::Error,
    }
}

/// Log one record describing a completed response.
///
/// No-op when the logger or the originating request is absent.
pub fn log_http_response<R>(
    logger: Option<&dyn Logger>,
    request: Option<&R>,
    status: u16,
    duration: Duration,
) where
    R: RequestDescriptor + ?Sized,
{
    let Some(request) = request else {
        return;
    };
    with_logger(logger, |l| {
        let mut fields = request_fields(request);
        fields.push(Field::new("status", status));
        fields.push(Field::new(DURATION_KEY, duration_ms(duration)));
        l.log_kv(level_for_status(status), "HTTP response", &fields);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::CaptureLogger;
    use axum::http::Request;

    fn respond(status: u16, duration: Duration) -> CaptureLogger {
        let logger = CaptureLogger::new();
        let request = Request::builder().uri("/orders").body(()).unwrap();
        log_http_response(Some(&logger), Some(&request), status, duration);
        logger
    }

    #[test]
    fn test_level_tiers() {
        assert_eq!(level_for_status(200), Level::Info);
        assert_eq!(level_for_status(204), Level::Info);
        assert_eq!(level_for_status(299), Level::Info);
        assert_eq!(level_for_status(300), Level::Warn);
        assert_eq!(level_for_status(301), Level::Warn);
        assert_eq!(level_for_status(399), Level::Warn);
        assert_eq!(level_for_status(400), Level::Error);
        assert_eq!(level_for_status(404), Level::Error);
        assert_eq!(level_for_status(500), Level::Error);
    }

    #[test]
    fn test_records_status_and_duration() {
        for (status, level) in [
            (200, Level::Info),
            (301, Level::Warn),
            (404, Level::Error),
            (500, Level::Error),
        ] {
            let logger = respond(status, Duration::from_millis(100));
            let records = logger.records();
            assert_eq!(records.len(), 1, "status {}", status);

            let record = &records[0];
            assert_eq!(record.level, level, "status {}", status);
            assert_eq!(record.field("status").and_then(|v| v.as_u64()), Some(status as u64));
            assert_eq!(record.field(DURATION_KEY).and_then(|v| v.as_u64()), Some(100));
            assert_eq!(record.field("method").and_then(|v| v.as_str()), Some("GET"));
            assert_eq!(record.field("url").and_then(|v| v.as_str()), Some("/orders"));
        }
    }

    #[test]
    fn test_absent_logger_or_request_is_noop() {
        let logger = CaptureLogger::new();
        log_http_response(Some(&logger), None::<&Request<()>>, 200, Duration::ZERO);
        assert!(logger.is_empty());

        let request = Request::new(());
        log_http_response(None, Some(&request), 500, Duration::ZERO);
    }
}
