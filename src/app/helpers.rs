//! Helper functions for the report command.
//!
//! Settings resolution between CLI parameters and configuration, and output
//! option construction.

use std::path::PathBuf;

use super::types::GenerateParams;
use crate::{
    cli::Format,
    config::Config,
    output::{OutputFormat, OutputOptions}
};

/// Effective settings after merging CLI parameters over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub input_dir:    PathBuf,
    pub extension:    String,
    pub output:       PathBuf,
    pub project_name: String
}

/// Merges CLI parameters over the loaded configuration.
///
/// An explicitly passed argument always wins; otherwise the configuration
/// value (already merged with environment and defaults) is used.
///
/// # Example
///
/// ```
/// use sql_schema_report::{
///     app::{GenerateParams, resolve_settings},
///     cli::Format,
///     config::Config
/// };
///
/// let params = GenerateParams {
///     input_dir:     None,
///     output:        Some("site/index.html".into()),
///     project_name:  None,
///     output_format: Format::Text,
///     no_color:      false
/// };
/// let settings = resolve_settings(&params, &Config::default());
///
/// assert_eq!(settings.input_dir.to_str(), Some("database-scripts"));
/// assert_eq!(settings.output.to_str(), Some("site/index.html"));
/// ```
pub fn resolve_settings(params: &GenerateParams, config: &Config) -> ResolvedSettings {
    ResolvedSettings {
        input_dir:    params
            .input_dir
            .clone()
            .unwrap_or_else(|| config.scan.input_dir.clone()),
        extension:    config.scan.extension.clone(),
        output:       params
            .output
            .clone()
            .unwrap_or_else(|| config.report.output.clone()),
        project_name: params
            .project_name
            .clone()
            .unwrap_or_else(|| config.report.project_name.clone())
    }
}

/// Convert CLI format to internal OutputFormat
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}

/// Creates output options from CLI parameters.
pub fn create_output_options(format: Format, no_color: bool) -> OutputOptions {
    OutputOptions {
        format:  convert_format(format),
        colored: !no_color
    }
}
