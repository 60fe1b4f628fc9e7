//! HTTP middleware.

pub mod logging;

pub use logging::{http_logging_middleware, RequestLogger};
