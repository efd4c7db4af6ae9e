//! Aggregation of per-file results into report totals.

use serde::Serialize;

use crate::{analyzer::FileReport, anomaly::AnomalyTally};

/// Totals across every analyzed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSummary {
    pub files:     usize,
    pub tables:    usize,
    pub lines:     usize,
    /// Sum of the per-file sizes as shown (each rounded to two decimals)
    pub size_kb:   f64,
    /// Kind-wise sum of every file's tally
    pub anomalies: AnomalyTally
}

impl ReportSummary {
    /// Sum the metrics of `files`.
    ///
    /// ```
    /// use sql_schema_report::{analyzer::analyze_content, report::ReportSummary};
    ///
    /// let a = analyze_content("a.sql", "a.sql", b"CREATE TABLE A (\nID INTEGER,\n);");
    /// let b = analyze_content("b.sql", "b.sql", b"CREATE TABLE B (\n);");
    /// let summary = ReportSummary::from_files(&[a, b]);
    ///
    /// assert_eq!(summary.files, 2);
    /// assert_eq!(summary.tables, 2);
    /// assert_eq!(summary.anomalies.total(), 6);
    /// ```
    pub fn from_files(files: &[FileReport]) -> Self {
        Self {
            files:     files.len(),
            tables:    files.iter().map(|f| f.tables).sum(),
            lines:     files.iter().map(|f| f.lines).sum(),
            size_kb:   files.iter().map(FileReport::size_kb).sum(),
            anomalies: files.iter().map(|f| &f.anomalies).sum()
        }
    }
}

/// Per-file entry of the serialized console summary.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary<'a> {
    pub filename:  &'a str,
    pub database:  &'a str,
    pub tables:    usize,
    pub lines:     usize,
    pub size_kb:   f64,
    pub anomalies: &'a AnomalyTally
}

impl<'a> From<&'a FileReport> for FileSummary<'a> {
    fn from(file: &'a FileReport) -> Self {
        Self {
            filename:  &file.filename,
            database:  &file.database,
            tables:    file.tables,
            lines:     file.lines,
            size_kb:   file.size_kb(),
            anomalies: &file.anomalies
        }
    }
}

/// Serializable summary of a complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary<'a> {
    pub output:  String,
    pub files:   Vec<FileSummary<'a>>,
    pub summary: &'a ReportSummary
}

/// Format a count with `,` thousands separators.
///
/// ```
/// use sql_schema_report::report::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
