//! CLI command implementations
//!
//! Commands write their results to a caller-supplied writer (stdout in the
//! binary) and log to stderr. Any error ends the process with status 1.

use std::io::{self, Write};
use std::path::PathBuf;

use serde_json::json;

use crate::observability::{log_event_with_fields, set_min_severity, Event};
use crate::pipeline::{Pipeline, PipelineError, PipelineReport};
use crate::presenter::{render_schema, render_table, table_to_json};
use crate::record::{sample_records, FullRecord, ProjectedRecord, Record};
use crate::schema::infer_for;
use crate::validation::{parse_date_time, ValidationRule};

use super::args::{Command, OutputFormat};
use super::config::{Config, RecordShape};
use super::errors::{CliError, CliResult};
use super::io::{load_records, write_json, write_text};

/// Options of the `run` command, before merging with the config file
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub field: Option<String>,
    pub shape: Option<RecordShape>,
    pub limit: Option<usize>,
    pub format: OutputFormat,
}

/// Parse arguments and run the selected command against stdout
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command_to(cmd, &mut out)
}

/// Run a command, writing its output to `out`
pub fn run_command_to<W: Write>(cmd: Command, out: &mut W) -> CliResult<()> {
    match cmd {
        Command::Run {
            config,
            input,
            field,
            shape,
            limit,
            format,
        } => {
            let opts = RunOptions {
                config,
                input,
                field,
                shape,
                limit,
                format,
            };
            run_pipeline(&opts, out)
        }
        Command::Schema { shape } => show_schema(shape, out),
        Command::Check { value } => check_value(&value, out),
    }
}

/// Loads the config file (or defaults) and applies command-line overrides
pub fn resolve_config(opts: &RunOptions) -> CliResult<Config> {
    let mut config = Config::load_or_default(opts.config.as_deref())?;

    if let Some(path) = &opts.config {
        let shown = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", shown.as_str())]);
    }

    if let Some(input) = &opts.input {
        config.input = Some(input.clone());
    }
    if let Some(field) = &opts.field {
        config.field = field.clone();
    }
    if let Some(shape) = opts.shape {
        config.shape = shape;
    }
    if let Some(limit) = opts.limit {
        config.show_limit = limit;
    }

    config.validate()?;
    Ok(config)
}

/// Run the pipeline and print schema, data and filtered data
pub fn run_pipeline<W: Write>(opts: &RunOptions, out: &mut W) -> CliResult<()> {
    let config = resolve_config(opts)?;
    set_min_severity(config.severity()?);

    let (records, source) = match &config.input {
        Some(path) => (load_records(path)?, path.display().to_string()),
        None => (sample_records(), "sample".to_string()),
    };
    let count = records.len().to_string();
    log_event_with_fields(
        Event::RecordsLoaded,
        &[("count", count.as_str()), ("source", source.as_str())],
    );

    let mut pipeline = Pipeline::new();
    let rule = ValidationRule::DateTime;
    let report = match config.shape {
        RecordShape::Full => pipeline.run_with_report(&records, &config.field, &rule)?,
        RecordShape::Projected => {
            let projected: Vec<ProjectedRecord> =
                records.iter().map(ProjectedRecord::from).collect();
            pipeline.run_with_report(&projected, &config.field, &rule)?
        }
    };

    match opts.format {
        OutputFormat::Text => write_text(out, &render_report(&report, config.show_limit)),
        OutputFormat::Json => write_json(out, &report_to_json(&report)?),
    }
}

/// Text form of a pipeline report
pub fn render_report(report: &PipelineReport, limit: usize) -> String {
    format!(
        "*** schema inferred from {}\n{}\n*** data\n{}\n*** filtered data ({} of {} rows passed)\n{}",
        report.table.schema().record_type(),
        render_schema(report.table.schema()),
        render_table(&report.table, limit),
        report.filtered.len(),
        report.table.len(),
        render_table(&report.filtered, limit),
    )
}

/// JSON form of a pipeline report
pub fn report_to_json(report: &PipelineReport) -> CliResult<serde_json::Value> {
    let rejected: Vec<serde_json::Value> = report
        .outcomes
        .iter()
        .filter_map(|o| {
            o.outcome
                .reason()
                .map(|reason| json!({"row": o.row_index, "reason": reason.to_string()}))
        })
        .collect();

    Ok(json!({
        "data": table_to_json(&report.table)?,
        "filtered": table_to_json(&report.filtered)?,
        "rejected": rejected,
    }))
}

/// Print the inferred schema of a record shape
pub fn show_schema<W: Write>(shape: RecordShape, out: &mut W) -> CliResult<()> {
    match shape {
        RecordShape::Full => print_schema::<FullRecord, W>(out),
        RecordShape::Projected => print_schema::<ProjectedRecord, W>(out),
    }
}

fn print_schema<R: Record, W: Write>(out: &mut W) -> CliResult<()> {
    let schema = infer_for::<R>().map_err(PipelineError::from)?;
    write_text(out, &render_schema(&schema))
}

/// Validate one value; an invalid value is reported as an error
pub fn check_value<W: Write>(value: &str, out: &mut W) -> CliResult<()> {
    let rule = ValidationRule::default();
    match parse_date_time(value) {
        Ok(parsed) => write_text(out, &format!("valid: {}\n", parsed)),
        Err(e) => Err(CliError::invalid_value(format!(
            "{} (expected {})",
            e,
            rule.pattern()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(opts: &RunOptions) -> String {
        let mut buf = Vec::new();
        run_pipeline(opts, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_run_sample_text() {
        let out = run_to_string(&RunOptions::default());
        assert!(out.starts_with("*** schema inferred from FullRecord\nroot\n"));
        assert!(out.contains("*** filtered data (4 of 5 rows passed)"));
    }

    #[test]
    fn test_run_sample_json() {
        let opts = RunOptions {
            format: OutputFormat::Json,
            ..RunOptions::default()
        };
        let parsed: serde_json::Value = serde_json::from_str(&run_to_string(&opts)).unwrap();
        assert_eq!(parsed["data"]["rows"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["filtered"]["rows"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["rejected"][0]["row"], 4);
    }

    #[test]
    fn test_run_projected_with_state_field() {
        // state is a string but never a date, so every row is dropped
        let opts = RunOptions {
            shape: Some(RecordShape::Projected),
            field: Some("state".into()),
            ..RunOptions::default()
        };
        let out = run_to_string(&opts);
        assert!(out.contains("schema inferred from ProjectedRecord"));
        assert!(out.contains("(0 of 5 rows passed)"));
    }

    #[test]
    fn test_overrides_applied() {
        let opts = RunOptions {
            field: Some("name".into()),
            limit: Some(3),
            ..RunOptions::default()
        };
        let config = resolve_config(&opts).unwrap();
        assert_eq!(config.field, "name");
        assert_eq!(config.show_limit, 3);
    }

    #[test]
    fn test_zero_limit_override_rejected() {
        let opts = RunOptions {
            limit: Some(0),
            ..RunOptions::default()
        };
        assert!(resolve_config(&opts).is_err());
    }

    #[test]
    fn test_check_value() {
        let mut buf = Vec::new();
        check_value("2018-07-07 12:12:12", &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "valid: 2018-07-07 12:12:12\n");

        let err = check_value("2018-13-07 12:12:12", &mut Vec::new()).unwrap_err();
        assert_eq!(err.code_str(), "RF_CLI_INVALID_VALUE");
        assert!(err.message().ends_with("(expected yyyy-MM-dd HH:mm:ss)"));
    }

    #[test]
    fn test_show_schema() {
        let mut buf = Vec::new();
        show_schema(RecordShape::Projected, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "root\n |-- sales: double (nullable = false)\n |-- state: string (nullable = false)\n"
        );
    }

    #[test]
    fn test_schema_failure_is_pipeline_error() {
        use crate::record::{DeclaredType, FieldDecl, RecordType, Value};

        struct Opaque;

        const OPAQUE_FIELDS: &[FieldDecl] =
            &[FieldDecl::new("blob", DeclaredType::Other("Vec<u8>"))];

        impl Record for Opaque {
            fn record_type() -> RecordType {
                RecordType::new("Opaque", OPAQUE_FIELDS)
            }

            fn value(&self, _field: &str) -> Option<Value> {
                None
            }
        }

        let err = print_schema::<Opaque, _>(&mut Vec::new()).unwrap_err();
        assert_eq!(err.code_str(), "RF_CLI_PIPELINE_FAILED");
        assert!(err.message().contains("RF_SCHEMA_UNSUPPORTED_TYPE"));
    }
}
