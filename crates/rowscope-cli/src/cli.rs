//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rowscope: explore remote tabular datasets from the terminal
#[derive(Parser)]
#[command(name = "rowscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show available configs and splits for a dataset
    Info {
        /// Dataset identifier (e.g. "openai/gdpval")
        #[arg(value_name = "DATASET")]
        dataset: String,
    },

    /// Fetch one sample row and show the display configuration for it
    Sample {
        /// Dataset identifier
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// Path to an explicit display config (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Fetch all rows and save a snapshot with provenance metadata
    Fetch {
        /// Dataset identifier
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// Output path (default: <dataset name>.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Fetch all rows and step through them interactively
    Explore {
        /// Dataset identifier
        #[arg(value_name = "DATASET")]
        dataset: String,

        /// Path to an explicit display config (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use json or csv.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
