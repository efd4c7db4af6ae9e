//! Heuristic schema anomaly detection.
//!
//! SQL text is scanned line by line without a SQL parser. Every line is
//! upper-cased, trimmed and classified by substring matching
//! ([`classify_line`]); the classified stream drives a small per-table state
//! machine ([`TableScanner`]) that produces one [`AnomalyTally`] per file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌───────────────┐
//! │  SQL lines  │────▶│ classify_line  │────▶│ TableScanner  │────▶ AnomalyTally
//! └─────────────┘     └────────────────┘     └───────────────┘
//! ```
//!
//! # Anomaly Kinds
//!
//! | Key | Counted when |
//! |-----|--------------|
//! | `tables_without_primary_key` | a table closes without a `PRIMARY KEY` line |
//! | `tables_without_indexes` | a table closes without an index marker |
//! | `tables_with_single_column` | a table closes with exactly one column line |
//! | `missing_foreign_keys` | a `FKY_` line has no `FOREIGN KEY` |
//! | `long_table_names` | a table opens with a name over 30 characters |
//! | `nullable_columns` | a column line has a comma but no `NOT NULL`/`DEFAULT` |
//!
//! The counts are approximate by nature. In particular `CREATE INDEX`
//! statements are credited to whichever table is still open when they are
//! read.
//!
//! # Example
//!
//! ```
//! use sql_schema_report::anomaly::{AnomalyKind, detect_anomalies};
//!
//! let sql = "CREATE TABLE CUSTOMER (\nID INTEGER,\nNAME VARCHAR(50),\nPRIMARY KEY (ID)\n);";
//! let tally = detect_anomalies(sql);
//!
//! assert_eq!(tally.get(AnomalyKind::TablesWithoutPrimaryKey), 0);
//! assert_eq!(tally.get(AnomalyKind::TablesWithoutIndexes), 1);
//! assert_eq!(tally.get(AnomalyKind::NullableColumns), 2);
//! ```

mod classify;
mod scanner;
mod types;

pub use classify::{LineKind, classify_line, normalize_line};
pub use scanner::{ScanState, TableAccumulator, TableScanner};
pub use types::{AnomalyKind, AnomalyTally, LONG_TABLE_NAME_LIMIT};

/// Detect anomalies in the full text of one SQL file.
pub fn detect_anomalies(content: &str) -> AnomalyTally {
    scanner::scan(content)
}
