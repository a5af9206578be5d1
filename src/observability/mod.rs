//! Observability for stockroom
//!
//! Structured single-line JSON logs: one line per event, written
//! synchronously with no buffering, with deterministic field ordering.
//! Logging is read-only and has no effect on execution.

mod logger;

pub use logger::{Logger, Severity};
