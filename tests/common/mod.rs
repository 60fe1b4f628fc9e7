//! Shared utilities for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;

use logkit::http::build_router;
use logkit::{CaptureLogger, Logger, Record};

/// Demo router logging into a fresh capture logger.
pub fn capture_router() -> (Arc<CaptureLogger>, Router) {
    let capture = Arc::new(CaptureLogger::new());
    let logger: Arc<dyn Logger> = capture.clone();
    (capture, build_router(logger))
}

/// Send one request through the router without a socket.
pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// First record with the given message.
pub fn find<'a>(records: &'a [Record], message: &str) -> &'a Record {
    records
        .iter()
        .find(|r| r.message == message)
        .unwrap_or_else(|| panic!("no record {:?} in {:#?}", message, records))
}

pub fn str_field<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.field(key).and_then(|v| v.as_str())
}
