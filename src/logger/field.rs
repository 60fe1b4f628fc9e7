//! Key-value fields attached to keyed records.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// One key-value pair of a keyed record.
///
/// Values keep their JSON type inside the record, so a port stays an
/// integer for loggers that inspect fields. Text backends such as
/// `TracingLogger` render them as `key=value` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: Cow<'static, str>,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::String(s) => write!(f, "{}={:?}", self.key, s),
            other => write!(f, "{}={}", self.key, other),
        }
    }
}

/// Build a `Vec<Field>` from `key => value` pairs.
///
/// ```
/// let fields = logkit::fields!["route" => "/health", "status" => 200];
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::Field>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Field::new($key, $value)),+]
    };
}

/// Renders fields as space separated `key=value` pairs.
pub struct DisplayFields<'a>(pub &'a [Field]);

impl fmt::Display for DisplayFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}
