//! Static HTML report rendering.
//!
//! The report is one self-contained page: an overview tab with per-file
//! cards, the aggregated anomaly grid and run totals, followed by one tab per
//! file holding its metrics, anomaly breakdown and escaped SQL source.
//! Styling and the tab/copy/search script are embedded from `html/`.

use std::{fs, path::Path};

use chrono::{DateTime, Local};

use crate::{
    analyzer::FileReport,
    anomaly::{AnomalyKind, AnomalyTally},
    error::{AppResult, file_write_error},
    report::{ReportSummary, format_count}
};

const STYLE: &str = include_str!("html/style.css");
const SCRIPT: &str = include_str!("html/script.js");

/// Card palette cycled across files: (background, border/text)
const CARD_COLORS: [(&str, &str); 6] = [
    ("#f0f7ff", "#0366d6"),
    ("#f0fff4", "#28a745"),
    ("#fff5f5", "#dc3545"),
    ("#fffbeb", "#f59e0b"),
    ("#f3e8ff", "#9333ea"),
    ("#ecfdf5", "#10b981")
];

/// Rendering options.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Project name shown in header and overview
    pub project_name: String,
    /// Timestamp printed in the banner and footer
    pub generated_at: DateTime<Local>
}

/// Escape text for HTML element content and attribute values.
///
/// ```
/// use sql_schema_report::html::escape_html;
///
/// assert_eq!(escape_html("a < b & 'c'"), "a &lt; b &amp; &#39;c&#39;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch)
        }
    }
    out
}

/// Tab identifier derived from a database name.
///
/// Files sharing a database name share a tab id.
pub fn tab_id(database: &str) -> String {
    database.to_lowercase().replace(' ', "_")
}

/// Badge color for an anomaly total: green, amber below 10, red otherwise.
pub fn anomaly_color(total: usize) -> &'static str {
    match total {
        0 => "#28a745",
        1..10 => "#f59e0b",
        _ => "#dc3545"
    }
}

/// Render a kilobyte size with the shortest decimal form, keeping one
/// fractional digit for whole numbers (`2.0 KB`, `1.5 KB`, `0.98 KB`).
pub fn format_kb(kb: f64) -> String {
    format!("{:?} KB", kb)
}

fn kind_color(kind: AnomalyKind) -> &'static str {
    match kind {
        AnomalyKind::TablesWithoutPrimaryKey => "#dc3545",
        AnomalyKind::TablesWithoutIndexes | AnomalyKind::LongTableNames => "#f59e0b",
        AnomalyKind::TablesWithSingleColumn => "#0366d6",
        AnomalyKind::MissingForeignKeys => "#9333ea",
        AnomalyKind::NullableColumns => "#28a745"
    }
}

/// Render the complete report document.
pub fn render_report(
    files: &[FileReport],
    summary: &ReportSummary,
    opts: &ReportOptions
) -> String {
    let project = escape_html(&opts.project_name);
    let mut html = String::with_capacity(
        STYLE.len() + SCRIPT.len() + files.iter().map(|f| f.content.len() * 2).sum::<usize>()
    );

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n"
    );
    html.push_str(&format!(
        "    <title>SQL Schema Validation - {} Overview</title>\n",
        project
    ));
    html.push_str(&format!("    <style>\n{}    </style>\n</head>\n<body>\n", STYLE));

    html.push_str(&format!(
        "    <header>\n        <div class=\"container\">\n            <h1>📊 {}</h1>\n            \
         <p>Database Schema Documentation</p>\n        </div>\n    </header>\n",
        project
    ));

    html.push_str("    <div class=\"container\">\n");
    html.push_str(&format!(
        "        <div class=\"info-banner\">\n            <p>🤖 This documentation was \
         automatically generated from SQL files on {}</p>\n        </div>\n",
        opts.generated_at.format("%B %d, %Y at %H:%M")
    ));
    html.push_str(
        "        <div class=\"search-container\">\n            <input type=\"text\" \
         class=\"search-input\" id=\"searchInput\" placeholder=\"🔍 Search across all SQL \
         files...\">\n        </div>\n"
    );

    render_tab_buttons(&mut html, files);
    render_overview(&mut html, files, summary, &project);
    for file in files {
        render_file_tab(&mut html, file);
    }
    html.push_str("    </div>\n");

    html.push_str(&format!(
        "    <footer>\n        <p>{} - Database SQL Scripts</p>\n        <p>Generated: {}</p>\n        \
         <p>{} SQL file(s) processed</p>\n    </footer>\n",
        project,
        opts.generated_at.format("%B %Y"),
        files.len()
    ));

    html.push_str(&format!("    <script>\n{}    </script>\n</body>\n</html>\n", SCRIPT));
    html
}

fn render_tab_buttons(html: &mut String, files: &[FileReport]) {
    html.push_str("        <div class=\"nav-tabs\">\n");
    html.push_str(
        "            <button class=\"nav-tab active\" data-tab=\"overview\" \
         onclick=\"showTab('overview', this)\">Overview</button>\n"
    );
    for file in files {
        let id = escape_html(&tab_id(&file.database));
        html.push_str(&format!(
            "            <button class=\"nav-tab\" data-tab=\"{id}\" onclick=\"showTab('{id}', \
             this)\">{} Database</button>\n",
            escape_html(&file.database)
        ));
    }
    html.push_str("        </div>\n");
}

fn render_overview(
    html: &mut String,
    files: &[FileReport],
    summary: &ReportSummary,
    project: &str
) {
    html.push_str(
        "        <div id=\"overview-tab\" class=\"tab-content active\" data-tab=\"overview\">\n"
    );
    html.push_str("            <div class=\"sql-info\">\n");
    html.push_str("                <h2>📋 Database Migration Overview</h2>\n");
    html.push_str(&format!(
        "                <p>This documentation contains the complete database schema for {} \
         database(s) in the {}.</p>\n",
        files.len(),
        project
    ));

    html.push_str("                <h3>Database Summary</h3>\n");
    html.push_str("                <div class=\"summary-grid\">\n");
    for (i, file) in files.iter().enumerate() {
        let (background, accent) = CARD_COLORS[i % CARD_COLORS.len()];
        let total = file.anomalies.total();
        html.push_str(&format!(
            "                    <div class=\"summary-card\" style=\"background: {background}; \
             border-color: {accent};\">\n                        <h4 style=\"color: \
             {accent};\">{} Database</h4>\n                        <p>{} - Database schema \
             definition</p>\n",
            escape_html(&file.database),
            escape_html(&file.filename)
        ));
        html.push_str(&format!(
            "                        <div>\n{}{}{}                        </div>\n",
            stat_item("Tables:", &file.tables.to_string(), None),
            stat_item("Lines:", &format_count(file.lines), None),
            stat_item("Size:", &format_kb(file.size_kb()), None)
        ));
        html.push_str(&format!(
            "                        <div>\n{}                        </div>\n",
            stat_item("⚠️ Anomalies:", &total.to_string(), Some(anomaly_color(total)))
        ));
        html.push_str("                    </div>\n");
    }
    html.push_str("                </div>\n");

    render_anomaly_grid(html, &summary.anomalies);

    html.push_str("                <div class=\"info-panel\">\n");
    html.push_str("                    <h3>ℹ️ Information</h3>\n                    <ul>\n");
    for item in [
        "Scripts include table creation, indexes, and foreign key constraints".to_string(),
        "Click on individual tabs to view complete SQL scripts".to_string(),
        format!("Total files: {}", summary.files),
        format!("Total tables: {}", summary.tables),
        format!("Total lines: {}", format_count(summary.lines)),
        format!("Total anomalies detected: {}", summary.anomalies.total())
    ] {
        html.push_str(&format!("                        <li>{}</li>\n", item));
    }
    html.push_str("                    </ul>\n                </div>\n");
    html.push_str("            </div>\n        </div>\n");
}

fn render_anomaly_grid(html: &mut String, anomalies: &AnomalyTally) {
    html.push_str("                <div class=\"anomaly-panel\">\n");
    html.push_str("                    <h3>⚠️ Schema Anomalies Detected</h3>\n");
    html.push_str(
        "                    <p>The following potential issues were detected in the database \
         schemas:</p>\n"
    );
    html.push_str("                    <div class=\"anomaly-grid\">\n");
    for (kind, count) in anomalies.iter() {
        html.push_str(&format!(
            "                        <div class=\"anomaly-cell\" data-kind=\"{}\">\n                            \
             <div class=\"title\" style=\"color: {};\">{}</div>\n                            \
             <div class=\"count\">{}</div>\n                        </div>\n",
            kind.key(),
            kind_color(kind),
            escape_html(kind.label()),
            count
        ));
    }
    html.push_str("                    </div>\n");
    html.push_str(
        "                    <p><strong>Note:</strong> These are potential issues that may \
         require review. Some may be intentional design decisions.</p>\n"
    );
    html.push_str("                </div>\n");
}

fn render_file_tab(html: &mut String, file: &FileReport) {
    let id = escape_html(&tab_id(&file.database));
    let database = escape_html(&file.database);
    let filename = escape_html(&file.filename);
    let total = file.anomalies.total();

    html.push_str(&format!(
        "        <div id=\"{id}-tab\" class=\"tab-content\" data-tab=\"{id}\">\n"
    ));
    html.push_str("            <div class=\"sql-info\">\n");
    html.push_str(&format!(
        "                <h2>{database} Database Schema</h2>\n                <p>Database: \
         {database}</p>\n"
    ));
    html.push_str("                <div class=\"stats\">\n");
    html.push_str(&stat_item("File:", &filename, None));
    html.push_str(&stat_item("Total Lines:", &format_count(file.lines), None));
    html.push_str(&stat_item("Tables:", &file.tables.to_string(), None));
    html.push_str(&stat_item("Size:", &format_kb(file.size_kb()), None));
    html.push_str(&stat_item("Anomalies:", &total.to_string(), Some(anomaly_color(total))));
    html.push_str("                </div>\n");

    if total > 0 {
        html.push_str("                <div class=\"breakdown\">\n");
        html.push_str(
            "                    <h3>⚠️ Anomaly Breakdown</h3>\n                    <ul>\n"
        );
        for (kind, count) in file.anomalies.iter() {
            html.push_str(&format!(
                "                        <li>{}: <strong>{}</strong></li>\n",
                escape_html(kind.label()),
                count
            ));
        }
        html.push_str("                    </ul>\n                </div>\n");
    }
    html.push_str("            </div>\n");

    html.push_str(&format!(
        "            <div class=\"sql-code\">\n                <div class=\"code-header\">\n                    \
         <span class=\"filename\">{filename}</span>\n                    <button class=\"copy-btn\" \
         onclick=\"copyCode('{id}-code', this)\">Copy Code</button>\n                </div>\n                \
         <pre id=\"{id}-code\">{}</pre>\n            </div>\n",
        escape_html(&file.content)
    ));
    html.push_str("        </div>\n");
}

fn stat_item(label: &str, value: &str, background: Option<&str>) -> String {
    let style = background
        .map(|color| format!(" style=\"background: {};\"", color))
        .unwrap_or_default();
    format!(
        "                            <span class=\"stat-item\"><span class=\"label\">{}</span> \
         <span class=\"value\"{}>{}</span></span>\n",
        label, style, value
    )
}

/// Write the rendered report, creating missing parent directories.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_report(path: &Path, html: &str) -> AppResult<()> {
    let display = path.display().to_string();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| file_write_error(&display, e))?;
    }
    fs::write(path, html).map_err(|e| file_write_error(&display, e))
}
