use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// SQL Schema Report - Scan SQL schema files for design anomalies and
/// generate an HTML overview
#[derive(Parser, Debug)]
#[command(name = "sql-schema-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the SQL files [default: database-scripts]
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Path of the generated HTML file [default: docs/index.html]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Project name shown in the report
    #[arg(long)]
    pub project_name: Option<String>,

    /// Format of the console summary
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: Format,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase diagnostic logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
