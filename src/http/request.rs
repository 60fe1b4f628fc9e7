//! Request descriptors, request IDs and request logging.
//!
//! # Responsibilities
//! - Read method, URL, headers and peer address from a request
//! - Locate the request ID (extension or `x-request-id` header)
//! - Log one record per incoming request
//!
//! # Design Decisions
//! - Descriptor is a trait so both `Request<B>` and `Parts` can be logged
//! - Optional fields (user agent, peer address) are omitted, not emptied

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{header, request::Parts, Extensions, HeaderMap, Method, Request, Uri};
use uuid::Uuid;

use crate::helpers::with_logger;
use crate::logger::{Field, Level, Logger};

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Read-only view of an HTTP request.
pub trait RequestDescriptor {
    fn method(&self) -> &Method;
    fn uri(&self) -> &Uri;
    fn headers(&self) -> &HeaderMap;
    fn extensions(&self) -> &Extensions;

    fn user_agent(&self) -> Option<&str> {
        self.headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
    }

    /// Peer address recorded by axum's `into_make_service_with_connect_info`.
    fn remote_addr(&self) -> Option<SocketAddr> {
        self.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr)
    }
}

impl<B> RequestDescriptor for Request<B> {
    fn method(&self) -> &Method {
        Request::method(self)
    }

    fn uri(&self) -> &Uri {
        Request::uri(self)
    }

    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }

    fn extensions(&self) -> &Extensions {
        Request::extensions(self)
    }
}

impl RequestDescriptor for Parts {
    fn method(&self) -> &Method {
        &self.method
    }

    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// Request identifier stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh UUID v4 identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup of the request ID in a request-scoped container.
///
/// Order: [`RequestId`] extension, tower-http `RequestId` extension, then the
/// `x-request-id` header where the container has headers. Empty IDs count
/// as absent.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

fn from_extensions(extensions: &Extensions) -> Option<&str> {
    extensions
        .get::<RequestId>()
        .map(RequestId::as_str)
        .or_else(|| {
            extensions
                .get::<tower_http::request_id::RequestId>()
                .and_then(|id| id.header_value().to_str().ok())
        })
        .filter(|id| !id.is_empty())
}

fn from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|id| !id.is_empty())
}

impl RequestIdExt for Extensions {
    fn request_id(&self) -> Option<&str> {
        from_extensions(self)
    }
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&str> {
        from_extensions(self.extensions()).or_else(|| from_headers(self.headers()))
    }
}

impl RequestIdExt for Parts {
    fn request_id(&self) -> Option<&str> {
        from_extensions(&self.extensions).or_else(|| from_headers(&self.headers))
    }
}

/// Fields shared by request and response records.
pub(crate) fn request_fields<R: RequestDescriptor + ?Sized>(request: &R) -> Vec<Field> {
    vec![
        Field::new("method", request.method().as_str().to_string()),
        Field::new("url", request.uri().to_string()),
    ]
}

/// Log one info record describing an incoming request.
///
/// No-op when the logger or the request is absent.
pub fn log_http_request<R>(logger: Option<&dyn Logger>, request: Option<&R>)
where
    R: RequestDescriptor + ?Sized,
{
    let Some(request) = request else {
        return;
    };
    with_logger(logger, |l| {
        let mut fields = request_fields(request);
        if let Some(agent) = request.user_agent() {
            fields.push(Field::new("user_agent", agent.to_string()));
        }
        if let Some(addr) = request.remote_addr() {
            fields.push(Field::new("remote_addr", addr.to_string()));
        }
        l.log_kv(Level::Info, "HTTP request", &fields);
    });
}
