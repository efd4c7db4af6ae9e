//! Report generation pipeline.

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{
    helpers::{create_output_options, resolve_settings},
    types::{CommandOutput, GenerateParams}
};
use crate::{
    analyzer::analyze_file,
    config::Config,
    discovery::find_sql_files,
    error::AppResult,
    html::{ReportOptions, render_report, write_report},
    output::{
        OutputFormat, format_file_progress, format_found, format_no_input, format_scan_start,
        format_summary
    },
    report::ReportSummary
};

/// Executes the complete report pipeline.
///
/// 1. **Discovery**: lists matching files in the input directory, sorted
/// 2. **Analysis**: reads and scans each file in order
/// 3. **Aggregation**: sums metrics and anomaly tallies
/// 4. **Rendering**: writes the HTML report
///
/// Finding no input files is not an error: the returned output carries a
/// message, exit code 0 and no report path.
///
/// # Errors
///
/// Returns an error if the input directory cannot be listed, any SQL file
/// cannot be read, or the report cannot be written. A single unreadable file
/// aborts the whole run.
///
/// # Example
///
/// ```no_run
/// use sql_schema_report::{
///     app::{GenerateParams, run_generate},
///     cli::Format,
///     config::Config
/// };
///
/// let params = GenerateParams {
///     input_dir:     Some("database-scripts".into()),
///     output:        Some("docs/index.html".into()),
///     project_name:  None,
///     output_format: Format::Text,
///     no_color:      false
/// };
///
/// let output = run_generate(params, Config::default()).unwrap();
/// for line in output.stdout {
///     println!("{}", line);
/// }
/// ```
pub fn run_generate(params: GenerateParams, config: Config) -> AppResult<CommandOutput> {
    let settings = resolve_settings(&params, &config);
    let opts = create_output_options(params.output_format, params.no_color);
    let text = matches!(opts.format, OutputFormat::Text);
    let mut stdout = Vec::new();

    if text {
        stdout.push(format_scan_start(&opts));
    }

    let paths = find_sql_files(&settings.input_dir, &settings.extension)?;
    if paths.is_empty() {
        stdout.push(format_no_input(&settings.input_dir.display().to_string(), &opts));
        return Ok(CommandOutput {
            exit_code: 0,
            stdout,
            report_path: None
        });
    }

    if text {
        stdout.push(format_found(paths.len(), &opts));
    }

    let pb = ProgressBar::new(paths.len() as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
    {
        pb.set_style(style);
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        pb.set_message(path.display().to_string());
        let file = analyze_file(path).inspect_err(|_| pb.finish_and_clear())?;
        if text {
            stdout.extend(format_file_progress(&file, &opts));
        }
        files.push(file);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = ReportSummary::from_files(&files);
    if text {
        stdout.push(String::new());
        stdout.push("🔨 Generating HTML documentation...".to_string());
    }

    let report_opts = ReportOptions {
        project_name: settings.project_name.clone(),
        generated_at: Local::now()
    };
    let html = render_report(&files, &summary, &report_opts);
    write_report(&settings.output, &html)?;
    info!(
        output = %settings.output.display(),
        files = summary.files,
        anomalies = summary.anomalies.total(),
        "report written"
    );

    let output_display = settings.output.display().to_string();
    stdout.push(format_summary(&files, &summary, &output_display, &opts)?);

    Ok(CommandOutput {
        exit_code: 0,
        stdout,
        report_path: Some(settings.output)
    })
}
