//! CLI argument definitions using clap
//!
//! Commands:
//! - recordframe run [--config <path>] [--input <path>] [--field <name>] ...
//! - recordframe schema [--shape full|projected]
//! - recordframe check <value>

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::config::RecordShape;

/// recordframe - typed records to validated tables
#[derive(Parser, Debug)]
#[command(name = "recordframe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// How `run` prints its tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Schema tree and ASCII grids
    #[default]
    Text,
    /// One JSON document
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert records to a table and filter rows by date validity
    Run {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// JSON array of full records (overrides config)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Column to validate (overrides config)
        #[arg(long)]
        field: Option<String>,

        /// Record shape (overrides config)
        #[arg(long, value_enum)]
        shape: Option<RecordShape>,

        /// Max rows per text table (overrides config)
        #[arg(long)]
        limit: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the schema inferred for a record shape
    Schema {
        /// Record shape
        #[arg(long, value_enum, default_value_t = RecordShape::Full)]
        shape: RecordShape,
    },

    /// Validate one date-time value
    Check {
        /// Value to parse as yyyy-MM-dd HH:mm:ss
        value: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
