//! Configuration file handling
//!
//! The config file is a single JSON object. Every key is optional:
//!
//! ```json
//! { "field": "date", "shape": "full", "input": "customers.json",
//!   "show_limit": 20, "log_level": "info" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Which record shape the pipeline runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordShape {
    /// All six customer fields
    #[default]
    Full,
    /// Sales and state only
    Projected,
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Column the date rule is applied to (default "date")
    #[serde(default = "default_field")]
    pub field: String,

    /// Record shape (default full)
    #[serde(default)]
    pub shape: RecordShape,

    /// JSON array of full records; the built-in sample is used when absent
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Max rows rendered per text table (default 20)
    #[serde(default = "default_show_limit")]
    pub show_limit: usize,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_field() -> String {
    "date".to_string()
}
fn default_show_limit() -> usize {
    20
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: default_field(),
            shape: RecordShape::default(),
            input: None,
            show_limit: default_show_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> CliResult<()> {
        if self.field.trim().is_empty() {
            return Err(CliError::config_error("field must not be empty"));
        }

        if self.show_limit == 0 {
            return Err(CliError::config_error("show_limit must be > 0"));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}
