//! In-memory logger for asserting on emitted records.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use super::{Field, Level, Logger};
use crate::error::Error;

/// A record captured by [`CaptureLogger`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub fields: Vec<Field>,
}

impl Record {
    /// Value of the first field named `key`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }
}

/// Logger that keeps every record in memory.
///
/// Plain and template calls are stored with an empty field list.
#[derive(Debug, Default)]
pub struct CaptureLogger {
    records: Mutex<Vec<Record>>,
    syncs: AtomicUsize,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records in emission order.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Records emitted at exactly `level`.
    pub fn records_at(&self, level: Level) -> Vec<Record> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of times `sync` was called.
    pub fn sync_count(&self) -> usize {
        self.syncs.load(Ordering::SeqCst)
    }

    fn push(&self, level: Level, message: String, fields: Vec<Field>) {
        self.lock().push(Record {
            level,
            message,
            fields,
        });
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        // A test that panicked mid-push still leaves usable records behind.
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Logger for CaptureLogger {
    fn log(&self, level: Level, msg: &str) {
        self.push(level, msg.to_string(), Vec::new());
    }

    fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        self.push(level, args.to_string(), Vec::new());
    }

    fn log_kv(&self, level: Level, msg: &str, fields: &[Field]) {
        self.push(level, msg.to_string(), fields.to_vec());
    }

    fn sync(&self) -> Result<(), Error> {
        self.syncs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
