//! Per-file metrics and anomaly analysis.
//!
//! Combines the anomaly scan with a handful of simple metrics. The table
//! count and database name are heuristics taken from plain substring and
//! token matching, not parsed facts: the table count can disagree with the
//! number of tables the scanner actually opened.
//!
//! # Example
//!
//! ```
//! use sql_schema_report::analyzer::analyze_content;
//!
//! let sql = b"CREATE DATABASE sales;\nCREATE TABLE orders (\n  id INTEGER NOT NULL\n);\n";
//! let report = analyze_content("sales.sql", "db/sales.sql", sql);
//!
//! assert_eq!(report.database, "sales");
//! assert_eq!(report.tables, 1);
//! assert_eq!(report.lines, 5);
//! assert_eq!(report.size_bytes, sql.len() as u64);
//! ```

use std::{fs, path::Path};

use compact_str::CompactString;
use serde::Serialize;
use tracing::debug;

use crate::{
    anomaly::{AnomalyTally, detect_anomalies},
    error::{AppResult, file_read_error}
};

/// Database name used when no `CREATE DATABASE` line is found
pub const UNKNOWN_DATABASE: &str = "Unknown";

/// Metrics and anomaly tally for one SQL file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    /// File name without directory
    pub filename:   String,
    /// Path the file was read from
    pub path:       String,
    /// Decoded file text
    #[serde(skip)]
    pub content:    String,
    /// Number of `\n`-separated segments
    pub lines:      usize,
    /// Case-insensitive `CREATE TABLE` occurrences
    pub tables:     usize,
    /// Name from the first usable `CREATE DATABASE` line
    pub database:   CompactString,
    /// Raw file size in bytes
    pub size_bytes: u64,
    pub anomalies:  AnomalyTally
}

impl FileReport {
    /// File size in kilobytes, rounded to two decimals.
    pub fn size_kb(&self) -> f64 {
        round_kb(self.size_bytes)
    }
}

/// Convert a byte count to kilobytes rounded to two decimals.
pub fn round_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}

/// Decode bytes as UTF-8, dropping invalid sequences instead of replacing them.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Convert `\r\n` and bare `\r` line breaks to `\n`.
///
/// ```
/// use sql_schema_report::analyzer::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
/// ```
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Count case-insensitive occurrences of `CREATE TABLE`.
pub fn count_tables(content: &str) -> usize {
    content.to_uppercase().matches("CREATE TABLE").count()
}

/// Extract the database name from the first usable `CREATE DATABASE` line.
///
/// The line is trimmed, trailing `;` are removed, and the third whitespace
/// token is returned with its original casing. Lines with fewer than three
/// tokens are skipped.
///
/// ```
/// use sql_schema_report::analyzer::database_name;
///
/// assert_eq!(database_name("create database Billing;\n"), "Billing");
/// assert_eq!(database_name("SELECT 1;"), "Unknown");
/// ```
pub fn database_name(content: &str) -> CompactString {
    content
        .split('\n')
        .filter(|line| line.to_uppercase().contains("CREATE DATABASE"))
        .find_map(|line| {
            line.trim()
                .trim_end_matches(';')
                .split_whitespace()
                .nth(2)
                .map(CompactString::from)
        })
        .unwrap_or_else(|| CompactString::from(UNKNOWN_DATABASE))
}

/// Analyze already loaded file bytes.
///
/// Pure: identical input always yields an identical report.
pub fn analyze_content(filename: &str, path: &str, bytes: &[u8]) -> FileReport {
    let content = normalize_newlines(&decode_lossy(bytes));
    let anomalies = detect_anomalies(&content);

    FileReport {
        filename: filename.to_string(),
        path: path.to_string(),
        lines: content.split('\n').count(),
        tables: count_tables(&content),
        database: database_name(&content),
        size_bytes: bytes.len() as u64,
        anomalies,
        content
    }
}

/// Read and analyze one SQL file.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Undecodable bytes are not an
/// error.
pub fn analyze_file(path: &Path) -> AppResult<FileReport> {
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| file_read_error(&display, e))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| display.clone());

    let report = analyze_content(&filename, &display, &bytes);
    debug!(
        file = %report.filename,
        tables = report.tables,
        lines = report.lines,
        anomalies = report.anomalies.total(),
        "analyzed file"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_drops_invalid_bytes() {
        let bytes = b"CREATE \xff\xfeTABLE T";
        assert_eq!(decode_lossy(bytes), "CREATE TABLE T");
    }

    #[test]
    fn test_count_tables_is_case_insensitive() {
        assert_eq!(count_tables("create table a;\nCreate Table b;\nCREATE TABLE c;"), 3);
        assert_eq!(count_tables("-- CREATE TABLE in a comment"), 1);
    }

    #[test]
    fn test_database_name_skips_short_lines() {
        let sql = "CREATE DATABASE\nCREATE DATABASE inventory ;\n";
        assert_eq!(database_name(sql), "inventory");
    }

    #[test]
    fn test_database_name_keeps_inner_semicolon() {
        assert_eq!(database_name("CREATE DATABASE shop; -- main"), "shop;");
    }

    #[test]
    fn test_bare_carriage_returns_split_lines() {
        let report = analyze_content("m.sql", "m.sql", b"CREATE TABLE T (\rID INTEGER,\r);");
        assert_eq!(report.lines, 3);
        assert_eq!(report.content, "CREATE TABLE T (\nID INTEGER,\n);");
    }

    #[test]
    fn test_round_kb() {
        assert_eq!(round_kb(0), 0.0);
        assert_eq!(round_kb(1024), 1.0);
        assert_eq!(round_kb(1536), 1.5);
        assert_eq!(round_kb(1000), 0.98);
    }

    #[test]
    fn test_line_count_includes_trailing_segment() {
        let report = analyze_content("a.sql", "a.sql", b"a\nb\n");
        assert_eq!(report.lines, 3);
        let report = analyze_content("e.sql", "e.sql", b"");
        assert_eq!(report.lines, 1);
    }
}
