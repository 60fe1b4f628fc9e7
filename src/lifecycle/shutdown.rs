//! Shutdown coordination and logging.

use std::time::Duration;

use tokio::sync::broadcast;

use crate::helpers::with_logger;
use crate::logger::{Field, Level, Logger};

/// Log one info record announcing the application shutdown.
///
/// `uptime` is rendered in Rust's human-readable duration form (`1.5s`,
/// `250ms`).
pub fn log_shutdown(logger: Option<&dyn Logger>, app_name: &str, uptime: Duration) {
    with_logger(logger, |l| {
        l.log_kv(
            Level::Info,
            "Application shutting down",
            &[
                Field::new("app", app_name),
                Field::new("uptime", format!("{:?}", uptime)),
            ],
        )
    });
}

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that all long-running tasks can subscribe to.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of tasks still waiting on the signal.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
