//! HTTP logging subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → SetRequestIdLayer (x-request-id, UUID v4 when missing)
//!     → middleware/logging.rs
//!         → context.rs (logger scoped to the request ID)
//!         → request.rs (log_http_request)
//!         → handler (RequestLogger extension)
//!         → response.rs (log_http_response, level by status)
//!     → PropagateRequestIdLayer (echo x-request-id)
//! ```

pub mod context;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use context::{with_request_id, RequestScopedLogger, REQUEST_ID_KEY};
pub use middleware::{http_logging_middleware, RequestLogger};
pub use request::{log_http_request, RequestDescriptor, RequestId, RequestIdExt, X_REQUEST_ID};
pub use response::{level_for_status, log_http_response};
pub use server::{build_router, HttpServer};
