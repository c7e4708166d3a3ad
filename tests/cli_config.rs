//! CLI and Configuration Tests
//!
//! Drives the command layer against temporary config and input files.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use recordframe::cli::{
    run_command_to, run_pipeline, Cli, CliErrorCode, Command, Config, OutputFormat, RecordShape,
    RunOptions,
};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const INPUT: &str = r#"[
  {"id": 1, "name": "Alpha", "sales": 10.5, "discount": 0.0, "state": "AZ", "date": "2021-03-04 05:06:07"},
  {"id": 2, "name": "Beta", "sales": 20.0, "discount": 1.0, "state": "CA", "date": "2021-02-29 05:06:07"},
  {"id": 3, "name": "Gamma", "sales": 30.0, "discount": 2.0, "state": "MA", "date": "2021-12-31 23:59:59"}
]"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_to_string(opts: &RunOptions) -> String {
    let mut buf = Vec::new();
    run_pipeline(opts, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn run_json(opts: RunOptions) -> serde_json::Value {
    let opts = RunOptions {
        format: OutputFormat::Json,
        ..opts
    };
    serde_json::from_str(&run_to_string(&opts)).unwrap()
}

// =============================================================================
// Config Files
// =============================================================================

#[test]
fn test_config_file_drives_run() {
    let tmp = TempDir::new().unwrap();
    let input = write_file(&tmp, "records.json", INPUT);
    let config = write_file(
        &tmp,
        "config.json",
        &format!(
            r#"{{"input": {}, "show_limit": 5, "log_level": "error"}}"#,
            serde_json::to_string(&input).unwrap()
        ),
    );

    let out = run_json(RunOptions {
        config: Some(config),
        ..RunOptions::default()
    });

    let kept: Vec<&str> = out["filtered"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(kept, vec!["Alpha", "Gamma"]);
    assert_eq!(out["rejected"][0]["row"], 1);
}

#[test]
fn test_flags_override_config() {
    let tmp = TempDir::new().unwrap();
    let input = write_file(&tmp, "records.json", INPUT);
    let config = write_file(&tmp, "config.json", r#"{"field": "name", "log_level": "error"}"#);

    let out = run_json(RunOptions {
        config: Some(config),
        input: Some(input),
        field: Some("date".to_string()),
        ..RunOptions::default()
    });

    assert_eq!(out["filtered"]["rows"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_config_key_rejected() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(&tmp, "config.json", r#"{"feild": "date"}"#);

    let err = Config::load(&config).unwrap_err();
    assert_eq!(*err.code(), CliErrorCode::ConfigError);
}

#[test]
fn test_bad_log_level_rejected() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(&tmp, "config.json", r#"{"log_level": "loud"}"#);

    assert!(Config::load(&config).is_err());
}

#[test]
fn test_projected_shape_from_config() {
    let tmp = TempDir::new().unwrap();
    let config = write_file(
        &tmp,
        "config.json",
        r#"{"shape": "projected", "field": "state", "log_level": "error"}"#,
    );

    let out = run_json(RunOptions {
        config: Some(config),
        ..RunOptions::default()
    });

    let schema = out["data"]["schema"].as_array().unwrap();
    assert_eq!(schema.len(), 2);
    assert_eq!(schema[0]["name"], "sales");
    assert_eq!(schema[1]["type"], "string");
    assert!(out["filtered"]["rows"].as_array().unwrap().is_empty());
}

// =============================================================================
// Input Errors
// =============================================================================

#[test]
fn test_malformed_input_is_input_error() {
    let tmp = TempDir::new().unwrap();
    let input = write_file(&tmp, "records.json", r#"[{"id": 1}]"#);

    let opts = RunOptions {
        input: Some(input),
        ..RunOptions::default()
    };
    let err = run_pipeline(&opts, &mut Vec::new()).unwrap_err();
    assert_eq!(*err.code(), CliErrorCode::InputError);
}

#[test]
fn test_missing_input_is_input_error() {
    let tmp = TempDir::new().unwrap();
    let opts = RunOptions {
        input: Some(tmp.path().join("absent.json")),
        ..RunOptions::default()
    };
    let err = run_pipeline(&opts, &mut Vec::new()).unwrap_err();
    assert_eq!(*err.code(), CliErrorCode::InputError);
}

// =============================================================================
// Text Output
// =============================================================================

#[test]
fn test_text_output_truncates_to_limit() {
    let out = run_to_string(&RunOptions {
        limit: Some(2),
        ..RunOptions::default()
    });

    assert!(out.contains("only showing top 2 rows"));
    assert!(out.contains("Widget Co"));
    assert!(!out.contains("Ye Olde Widgete"));
}

#[test]
fn test_text_output_lists_schema() {
    let out = run_to_string(&RunOptions::default());
    assert!(out.contains(" |-- id: integer (nullable = false)\n"));
    assert!(out.contains(" |-- date: string (nullable = false)\n"));
}

// =============================================================================
// Argument Parsing
// =============================================================================

#[test]
fn test_parse_and_dispatch_schema() {
    let cli = Cli::try_parse_from(["recordframe", "schema", "--shape", "projected"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Schema {
            shape: RecordShape::Projected
        }
    ));

    let mut buf = Vec::new();
    run_command_to(cli.command, &mut buf).unwrap();
    assert!(String::from_utf8(buf).unwrap().starts_with("root\n |-- sales: double"));
}

#[test]
fn test_parse_and_dispatch_check() {
    let cli = Cli::try_parse_from(["recordframe", "check", "2018-07-07 12:12:12"]).unwrap();
    let mut buf = Vec::new();
    run_command_to(cli.command, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "valid: 2018-07-07 12:12:12\n");

    let cli = Cli::try_parse_from(["recordframe", "check", "2018-07-07 12:12:60"]).unwrap();
    let err = run_command_to(cli.command, &mut Vec::new()).unwrap_err();
    assert_eq!(*err.code(), CliErrorCode::InvalidValue);
}

#[test]
fn test_unknown_shape_rejected_by_parser() {
    assert!(Cli::try_parse_from(["recordframe", "schema", "--shape", "wide"]).is_err());
}
