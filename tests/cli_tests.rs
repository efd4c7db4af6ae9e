// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;
use sql_schema_report::{
    app::{GenerateParams, convert_format, create_output_options, resolve_settings},
    cli::{Cli, Format},
    config::Config,
    logging::level_for,
    output::OutputFormat
};
use tracing::Level;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["sql-schema-report"]).unwrap();
    assert!(cli.input_dir.is_none());
    assert!(cli.output.is_none());
    assert!(matches!(cli.format, Format::Text));
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn test_verbose_counts() {
    let cli = Cli::try_parse_from(["sql-schema-report", "-vv"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(level_for(cli.verbose, cli.quiet), Level::TRACE);
}

#[test]
fn test_log_levels() {
    assert_eq!(level_for(0, false), Level::WARN);
    assert_eq!(level_for(1, false), Level::DEBUG);
    assert_eq!(level_for(3, true), Level::ERROR);
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["sql-schema-report", "-f", "csv"]).is_err());
}

#[test]
fn test_convert_format() {
    assert!(matches!(convert_format(Format::Text), OutputFormat::Text));
    assert!(matches!(convert_format(Format::Json), OutputFormat::Json));
    assert!(matches!(convert_format(Format::Yaml), OutputFormat::Yaml));
}

#[test]
fn test_output_options_color() {
    assert!(!create_output_options(Format::Text, true).colored);
    assert!(create_output_options(Format::Json, false).colored);
}

#[test]
fn test_cli_values_override_config() {
    let cli = Cli::try_parse_from([
        "sql-schema-report",
        "-i",
        "cli-dir",
        "--project-name",
        "From CLI"
    ])
    .unwrap();
    let mut config = Config::default();
    config.scan.input_dir = PathBuf::from("config-dir");
    config.report.output = PathBuf::from("config.html");

    let settings = resolve_settings(&GenerateParams::from(cli), &config);

    assert_eq!(settings.input_dir, PathBuf::from("cli-dir"));
    assert_eq!(settings.output, PathBuf::from("config.html"));
    assert_eq!(settings.project_name, "From CLI");
    assert_eq!(settings.extension, "sql");
}
