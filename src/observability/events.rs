//! Observable pipeline events
//!
//! Events are explicit and typed; each has a fixed severity. The run itself
//! is bracketed by an `ObservationScope` named `PIPELINE`, which emits
//! `PIPELINE_BEGIN`, `PIPELINE_COMPLETE` and `PIPELINE_FAILED`.

use std::fmt;

use super::logger::Severity;

/// Observable events in a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Setup
    /// Configuration file loaded
    ConfigLoaded,
    /// Input records loaded
    RecordsLoaded,

    // Pipeline
    /// Schema inferred (or taken from cache)
    SchemaInferred,
    /// Records converted into a table
    TableConverted,
    /// Row passed validation
    RowAccepted,
    /// Row failed validation and was dropped
    RowRejected,
    /// Filter field is not part of the schema
    FilterFieldUnknown,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RecordsLoaded => "RECORDS_LOADED",
            Event::SchemaInferred => "SCHEMA_INFERRED",
            Event::TableConverted => "TABLE_CONVERTED",
            Event::RowAccepted => "ROW_ACCEPTED",
            Event::RowRejected => "ROW_REJECTED",
            Event::FilterFieldUnknown => "FILTER_FIELD_UNKNOWN",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RowRejected | Event::FilterFieldUnknown => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
