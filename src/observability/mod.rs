//! Observability for stringdb
//!
//! Structured JSON logging only: one line per event, explicit severity,
//! synchronous writes, deterministic field ordering. Logging is read-only
//! with respect to the store and must never affect request handling.

mod logger;

pub use logger::{Logger, Severity};
