//! Request/response logging middleware.
//!
//! Logs one record when a request arrives and one when its response is
//! ready, both through a logger scoped to the request ID. The scoped logger
//! is stored in the request extensions for handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::context::with_request_id;
use crate::http::request::log_http_request;
use crate::http::response::log_http_response;
use crate::logger::Logger;

/// Request-scoped logger attached to requests by [`http_logging_middleware`].
///
/// Extract it in handlers with `Extension<RequestLogger>`.
#[derive(Clone)]
pub struct RequestLogger(pub Arc<dyn Logger>);

impl RequestLogger {
    pub fn logger(&self) -> &dyn Logger {
        self.0.as_ref()
    }
}

/// Method and URI survive the request being moved into the handler.
fn snapshot(req: &Request<Body>) -> Request<()> {
    let mut snapshot = Request::new(());
    *snapshot.method_mut() = req.method().clone();
    *snapshot.uri_mut() = req.uri().clone();
    snapshot
}

pub async fn http_logging_middleware(
    State(logger): State<Arc<dyn Logger>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let scoped = with_request_id(&req, Some(logger));

    log_http_request(scoped.as_deref(), Some(&req));

    let snapshot = snapshot(&req);
    if let Some(scoped) = &scoped {
        req.extensions_mut().insert(RequestLogger(scoped.clone()));
    }

    let response = next.run(req).await;

    log_http_response(
        scoped.as_deref(),
        Some(&snapshot),
        response.status().as_u16(),
        started.elapsed(),
    );
    response
}
