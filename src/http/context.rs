//! Request-scoped logger decorator.

use std::fmt;
use std::sync::Arc;

use super::request::RequestIdExt;
use crate::error::Error;
use crate::logger::{Field, Level, Logger};

pub const REQUEST_ID_KEY: &str = "request_id";

/// Logger that appends `request_id` to every record before delegating.
///
/// Plain and template calls are forwarded as keyed calls so the ID is never
/// lost.
#[derive(Clone)]
pub struct RequestScopedLogger {
    base: Arc<dyn Logger>,
    request_id: String,
}

impl RequestScopedLogger {
    pub fn new(base: Arc<dyn Logger>, request_id: impl Into<String>) -> Self {
        Self {
            base,
            request_id: request_id.into(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    fn id_field(&self) -> Field {
        Field::new(REQUEST_ID_KEY, self.request_id.clone())
    }
}

impl fmt::Debug for RequestScopedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestScopedLogger")
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}

impl Logger for RequestScopedLogger {
    fn log(&self, level: Level, msg: &str) {
        self.base.log_kv(level, msg, &[self.id_field()]);
    }

    fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        self.base.log_kv(level, &args.to_string(), &[self.id_field()]);
    }

    fn log_kv(&self, level: Level, msg: &str, fields: &[Field]) {
        let mut all = Vec::with_capacity(fields.len() + 1);
        all.extend_from_slice(fields);
        all.push(self.id_field());
        self.base.log_kv(level, msg, &all);
    }

    fn sync(&self) -> Result<(), Error> {
        self.base.sync()
    }
}

/// Scope `logger` to the request ID found in `container`.
///
/// - No logger: `None`
/// - No request ID: the same `Arc` that was passed in
/// - Otherwise: a [`RequestScopedLogger`] around it
pub fn with_request_id<C>(
    container: &C,
    logger: Option<Arc<dyn Logger>>,
) -> Option<Arc<dyn Logger>>
where
    C: RequestIdExt + ?Sized,
{
    let base = logger?;
    match container.request_id() {
        Some(id) => {
            let scoped: Arc<dyn Logger> = Arc::new(RequestScopedLogger::new(base, id));
            Some(scoped)
        }
        None => Some(base),
    }
}
