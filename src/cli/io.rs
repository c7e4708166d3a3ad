//! Input loading and output writing for the CLI
//!
//! - Input: a JSON array of full records
//! - Output: UTF-8 text on the given writer

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::record::FullRecord;

use super::errors::{CliError, CliResult};

/// Read a JSON array of full records from `path`
pub fn load_records(path: &Path) -> CliResult<Vec<FullRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::input_error(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        CliError::input_error(format!("Invalid records in '{}': {}", path.display(), e))
    })
}

/// Write a block of text and flush
pub fn write_text<W: Write>(out: &mut W, text: &str) -> CliResult<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write a JSON value as one pretty-printed document
pub fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
