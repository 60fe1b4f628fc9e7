//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! helpers / middleware
//!     → Logger trait
//!     → tracing.rs (TracingLogger: Logger → tracing events)
//!     → logging.rs (subscriber: EnvFilter + fmt layer, pretty or JSON)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - `tracing` is the only backend shipped; other backends implement `Logger`
//! - `RUST_LOG` wins over the configured level

pub mod logging;
pub mod tracing;

pub use self::logging::init_tracing;
pub use self::tracing::TracingLogger;
