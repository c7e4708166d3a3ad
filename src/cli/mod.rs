//! CLI module for recordframe
//!
//! Provides command-line interface for:
//! - run: Convert records, filter by date validity, print both tables
//! - schema: Print the inferred schema of a record shape
//! - check: Validate a single date-time value

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, OutputFormat};
pub use commands::{
    check_value, render_report, report_to_json, resolve_config, run, run_command, run_command_to,
    run_pipeline, show_schema, RunOptions,
};
pub use config::{Config, RecordShape};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{load_records, write_json, write_text};
