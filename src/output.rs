use colored::Colorize;

use crate::{
    analyzer::FileReport,
    error::{AppResult, serialize_error},
    report::{FileSummary, ReportSummary, RunSummary, format_count}
};

/// Output format for the console summary
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

fn paint(text: &str, opts: &OutputOptions, style: fn(&str) -> colored::ColoredString) -> String {
    if opts.colored {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Line printed before scanning starts
pub fn format_scan_start(opts: &OutputOptions) -> String {
    paint("🔍 Scanning for SQL files...", opts, |s| s.bold())
}

/// Line printed when no input file matched
pub fn format_no_input(dir: &str, opts: &OutputOptions) -> String {
    paint(&format!("❌ No SQL files found in {}", dir), opts, |s| s.red().bold())
}

/// Line printed after discovery
pub fn format_found(count: usize, opts: &OutputOptions) -> String {
    paint(&format!("✅ Found {} SQL file(s)", count), opts, |s| s.green())
}

/// Progress lines for one analyzed file
pub fn format_file_progress(file: &FileReport, opts: &OutputOptions) -> Vec<String> {
    let total = file.anomalies.total();
    let anomalies = format!("{} anomalies", total);
    let anomalies = if !opts.colored {
        anomalies
    } else if total == 0 {
        anomalies.green().to_string()
    } else if total < 10 {
        anomalies.yellow().to_string()
    } else {
        anomalies.red().to_string()
    };

    vec![
        format!("   📄 Analyzing {}...", file.filename),
        format!(
            "      → {} tables, {} lines, {}",
            file.tables,
            format_count(file.lines),
            anomalies
        ),
    ]
}

/// Format the closing summary in the configured format.
///
/// Text output is the human-readable block; JSON and YAML serialize the
/// per-file metrics and totals (without SQL content).
pub fn format_summary(
    files: &[FileReport],
    summary: &ReportSummary,
    output: &str,
    opts: &OutputOptions
) -> AppResult<String> {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&run_summary(files, summary, output))
            .map_err(|e| serialize_error(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(&run_summary(files, summary, output))
            .map_err(|e| serialize_error(e.to_string())),
        OutputFormat::Text => Ok(format_text_summary(summary, output, opts))
    }
}

fn run_summary<'a>(
    files: &'a [FileReport],
    summary: &'a ReportSummary,
    output: &str
) -> RunSummary<'a> {
    RunSummary {
        output: output.to_string(),
        files: files.iter().map(FileSummary::from).collect(),
        summary
    }
}

fn format_text_summary(summary: &ReportSummary, output: &str, opts: &OutputOptions) -> String {
    let mut text = String::new();

    text.push_str(&paint("✅ HTML documentation generated successfully!", opts, |s| {
        s.green().bold()
    }));
    text.push('\n');
    text.push_str(&format!("📁 Output: {}\n", output));

    text.push('\n');
    text.push_str(&paint("📊 Summary:", opts, |s| s.cyan().bold()));
    text.push('\n');
    text.push_str(&format!("   Total SQL files: {}\n", summary.files));
    text.push_str(&format!("   Total tables: {}\n", summary.tables));
    text.push_str(&format!("   Total lines: {}\n", format_count(summary.lines)));
    text.push_str(&format!("   Total size: {:.2} KB\n", summary.size_kb));

    text.push('\n');
    text.push_str(&paint("⚠️  Anomaly Summary:", opts, |s| s.yellow().bold()));
    text.push('\n');
    text.push_str(&format!(
        "   Total anomalies detected: {}\n",
        summary.anomalies.total()
    ));
    for (kind, count) in summary.anomalies.iter() {
        text.push_str(&format!("   - {}: {}\n", kind.label(), count));
    }

    text.push_str(&format!(
        "\n🌐 Open {} in your browser to view the documentation!",
        output
    ));
    text
}
