//! Demo HTTP server.
//!
//! # Responsibilities
//! - Create Axum Router with the demo handlers
//! - Wire up middleware (request ID, propagation, request logging)
//! - Serve until the shutdown signal fires
//!
//! Layer order, outermost first:
//! `TraceLayer → SetRequestId → PropagateRequestId → http_logging_middleware`

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::helpers::log_panic_as_error;
use crate::http::middleware::{http_logging_middleware, RequestLogger};
use crate::logger::Logger;

/// HTTP server for the demo service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            router: build_router(logger),
        }
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(logger: Arc<dyn Logger>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/panic", get(panic_route))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::from_fn_with_state(logger, http_logging_middleware)),
        )
}

async fn index(Extension(RequestLogger(logger)): Extension<RequestLogger>) -> &'static str {
    logger.debug("Serving index");
    "logkit demo\n"
}

async fn health() -> &'static str {
    "ok\n"
}

async fn panic_route(Extension(RequestLogger(logger)): Extension<RequestLogger>) -> Response {
    match log_panic_as_error(Some(&*logger), "panic_route", || panic!("panic requested")) {
        Ok(()) => (StatusCode::OK, "no panic\n").into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{}\n", err)).into_response(),
    }
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found\n")
}
