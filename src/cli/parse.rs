//! CLI parse: clap types for assertgen. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// assertgen - resolve assertion generator settings for build units
#[derive(Parser)]
#[command(name = "assertgen")]
#[command(about = "Resolve layered assertion generator configuration for build units")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Build description file (skips global, workspace and environment layers)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve effective options for one unit or all units
    Resolve {
        /// Unit to resolve (default: every unit in the build description)
        #[arg(long)]
        unit: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Append "-test" to the unit name when substituting the output directory
        #[arg(long)]
        test_suffix: bool,
    },
    /// List template kinds and entry point kinds
    Kinds {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Resolve every unit and check that template files are readable
    Validate,
}
