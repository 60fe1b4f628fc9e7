//! Lifecycle logging and coordination.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     log_startup(app, version, port) → serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     server drains → log_shutdown(app, uptime)
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{log_shutdown, Shutdown};
pub use signals::wait_for_signal;
pub use startup::log_startup;
