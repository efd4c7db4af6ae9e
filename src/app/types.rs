//! Application types for the report command.
//!
//! This module defines the parameters passed from the CLI to the pipeline
//! and the output it hands back for printing.

use std::path::PathBuf;

use crate::cli::{Cli, Format};

/// Parameters for the report command.
///
/// Every path and name is optional; unset values fall back to the loaded
/// configuration.
///
/// # Example
///
/// ```
/// use sql_schema_report::{app::GenerateParams, cli::Format};
///
/// let params = GenerateParams {
///     input_dir:     Some("schemas".into()),
///     output:        None,
///     project_name:  None,
///     output_format: Format::Text,
///     no_color:      true
/// };
/// ```
#[derive(Debug, Clone)]
pub struct GenerateParams {
    /// Directory containing the SQL files.
    pub input_dir:     Option<PathBuf>,
    /// Path of the generated HTML file.
    pub output:        Option<PathBuf>,
    /// Project name shown in the report.
    pub project_name:  Option<String>,
    /// Format of the console summary.
    pub output_format: Format,
    /// Disable colored terminal output.
    pub no_color:      bool
}

impl From<Cli> for GenerateParams {
    fn from(cli: Cli) -> Self {
        Self {
            input_dir:     cli.input_dir,
            output:        cli.output,
            project_name:  cli.project_name,
            output_format: cli.format,
            no_color:      cli.no_color
        }
    }
}

/// Output from command execution.
///
/// Represents the final output ready for display, including the exit code
/// and all lines to be printed to stdout.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code for the process.
    pub exit_code:   i32,
    /// Lines to print to stdout.
    pub stdout:      Vec<String>,
    /// Path of the written report, `None` when nothing was generated.
    pub report_path: Option<PathBuf>
}
