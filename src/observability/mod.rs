//! Observability subsystem
//!
//! Structured JSON logging for pipeline runs.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on pipeline results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use recordframe::observability::{log_event_with_fields, Event, Logger};
//!
//! Logger::info("CUSTOM_EVENT", &[("rows", "42")]);
//! log_event_with_fields(Event::RowRejected, &[("row", "4")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{set_min_severity, Logger, Severity};
pub use scope::ObservationScope;

/// Log a pipeline event at its own severity
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a pipeline event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
