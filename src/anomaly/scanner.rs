//! Per-table state machine driven by classified lines.
//!
//! The scanner is a left-to-right fold: at most one [`TableAccumulator`] is
//! live at a time, a table closes when the next `CREATE TABLE` line arrives
//! or when input ends, and closing folds the table's facts into the running
//! [`AnomalyTally`].

use std::mem;

use compact_str::CompactString;
use smallvec::SmallVec;
use tracing::trace;

use super::{
    classify::{LineKind, classify_line, normalize_line},
    types::{AnomalyKind, AnomalyTally, LONG_TABLE_NAME_LIMIT}
};

/// Facts gathered for the table currently being scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableAccumulator {
    /// Extracted table name, `None` for a nameless `CREATE TABLE` line
    pub name:            Option<CompactString>,
    pub has_primary_key: bool,
    pub has_index:       bool,
    /// Recognized column definition lines, in source order
    pub column_lines:    SmallVec<[String; 8]>
}

impl TableAccumulator {
    fn new(name: Option<CompactString>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Fold this table's end-of-table checks into `tally`.
    fn finalize(self, tally: &mut AnomalyTally) {
        if !self.has_primary_key {
            tally.increment(AnomalyKind::TablesWithoutPrimaryKey);
        }
        if !self.has_index {
            tally.increment(AnomalyKind::TablesWithoutIndexes);
        }
        if self.column_lines.len() == 1 {
            tally.increment(AnomalyKind::TablesWithSingleColumn);
        }
        trace!(
            table = self.name.as_deref().unwrap_or("<unnamed>"),
            primary_key = self.has_primary_key,
            index = self.has_index,
            columns = self.column_lines.len(),
            "table closed"
        );
    }
}

/// Scanner state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    NoTableOpen,
    TableOpen(TableAccumulator)
}

/// Streaming anomaly scanner for one file.
///
/// # Example
///
/// ```
/// use sql_schema_report::anomaly::{AnomalyKind, TableScanner};
///
/// let mut scanner = TableScanner::new();
/// for line in ["CREATE TABLE T (", "ID INTEGER NOT NULL", ");"] {
///     scanner.feed(line);
/// }
/// let tally = scanner.finish();
///
/// assert_eq!(tally.get(AnomalyKind::TablesWithoutPrimaryKey), 1);
/// assert_eq!(tally.get(AnomalyKind::TablesWithSingleColumn), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableScanner {
    state: ScanState,
    tally: AnomalyTally
}

impl TableScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the table state machine.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn is_table_open(&self) -> bool {
        matches!(self.state, ScanState::TableOpen(_))
    }

    /// Anomalies counted so far, not including the still-open table.
    pub fn tally(&self) -> &AnomalyTally {
        &self.tally
    }

    /// Classify a raw source line and apply it.
    pub fn feed(&mut self, raw: &str) {
        let line = normalize_line(raw);
        let kind = classify_line(&line, self.is_table_open());
        self.apply(kind, line);
    }

    /// Apply an already classified, normalized line.
    pub fn apply(&mut self, kind: LineKind, line: String) {
        match kind {
            LineKind::TableStart { name } => self.start_table(name),
            LineKind::Column { nullable } => {
                if let ScanState::TableOpen(table) = &mut self.state {
                    table.column_lines.push(line);
                    if nullable {
                        self.tally.increment(AnomalyKind::NullableColumns);
                    }
                }
            }
            LineKind::PrimaryKey => {
                if let ScanState::TableOpen(table) = &mut self.state {
                    table.has_primary_key = true;
                }
            }
            // Index statements usually follow the table body; they land on
            // whichever table is still open, or nowhere.
            LineKind::Index => {
                if let ScanState::TableOpen(table) = &mut self.state {
                    table.has_index = true;
                }
            }
            LineKind::MissingForeignKey => self.tally.increment(AnomalyKind::MissingForeignKeys),
            LineKind::TypedStatement | LineKind::Other => {}
        }
    }

    fn start_table(&mut self, name: Option<CompactString>) {
        let was_open = match mem::take(&mut self.state) {
            ScanState::TableOpen(previous) => {
                previous.finalize(&mut self.tally);
                true
            }
            ScanState::NoTableOpen => false
        };

        self.state = match name {
            Some(name) if name.is_empty() => ScanState::NoTableOpen,
            Some(name) => {
                if name.chars().count() > LONG_TABLE_NAME_LIMIT {
                    self.tally.increment(AnomalyKind::LongTableNames);
                }
                ScanState::TableOpen(TableAccumulator::new(Some(name)))
            }
            // A nameless start keeps the scan inside a table only if one was
            // already open.
            None if was_open => ScanState::TableOpen(TableAccumulator::new(None)),
            None => ScanState::NoTableOpen
        };
    }

    /// Close the open table, if any, and return the final tally.
    pub fn finish(mut self) -> AnomalyTally {
        if let ScanState::TableOpen(table) = mem::take(&mut self.state) {
            table.finalize(&mut self.tally);
        }
        self.tally
    }
}

/// Scan SQL text and return its anomaly tally.
///
/// Lines are split on `\n` and `\r`; each is trimmed and upper-cased before
/// matching. The empty segment between `\r\n` carries no signal.
pub fn scan(content: &str) -> AnomalyTally {
    content
        .split(['\n', '\r'])
        .fold(TableScanner::new(), |mut scanner, raw| {
            scanner.feed(raw);
            scanner
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_carriage_return_breaks_lines() {
        let tally = scan("CREATE TABLE T (\rID INTEGER,\r);");
        assert_eq!(tally.get(AnomalyKind::TablesWithSingleColumn), 1);
        assert_eq!(tally.get(AnomalyKind::NullableColumns), 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_initial_state() {
        let scanner = TableScanner::new();
        assert_eq!(scanner.state(), &ScanState::NoTableOpen);
        assert!(scanner.tally().is_clean());
    }

    #[test]
    fn test_table_start_opens_accumulator() {
        let mut scanner = TableScanner::new();
        scanner.feed("create table customer (");
        match scanner.state() {
            ScanState::TableOpen(table) => {
                assert_eq!(table.name.as_deref(), Some("CUSTOMER"));
                assert!(!table.has_primary_key);
                assert!(table.column_lines.is_empty());
            }
            ScanState::NoTableOpen => panic!("expected open table")
        }
    }

    #[test]
    fn test_columns_are_recorded_in_order() {
        let mut scanner = TableScanner::new();
        scanner.feed("CREATE TABLE T (");
        scanner.feed("  id integer not null,");
        scanner.feed("  name varchar(20)");
        let ScanState::TableOpen(table) = scanner.state() else {
            panic!("expected open table");
        };
        assert_eq!(
            table.column_lines.as_slice(),
            ["ID INTEGER NOT NULL,", "NAME VARCHAR(20)"]
        );
    }

    #[test]
    fn test_long_name_counted_on_open() {
        let mut scanner = TableScanner::new();
        scanner.feed("CREATE TABLE CUSTOMER_ORDER_LINE_ITEM_HISTORY_X (");
        assert_eq!(scanner.tally().get(AnomalyKind::LongTableNames), 1);
        assert_eq!(scanner.tally().get(AnomalyKind::TablesWithoutPrimaryKey), 0);
    }

    #[test]
    fn test_thirty_char_name_is_not_long() {
        let name = "A".repeat(30);
        let tally = scan(&format!("CREATE TABLE {} (", name));
        assert_eq!(tally.get(AnomalyKind::LongTableNames), 0);
    }

    #[test]
    fn test_index_without_open_table_is_discarded() {
        let tally = scan("CREATE INDEX IX ON T (A);\nCREATE TABLE T (\nPRIMARY KEY (A)\n);");
        assert_eq!(tally.get(AnomalyKind::TablesWithoutIndexes), 1);
    }

    #[test]
    fn test_nameless_start_while_closed_stays_closed() {
        let mut scanner = TableScanner::new();
        scanner.feed("CREATE TABLE");
        assert!(!scanner.is_table_open());
        assert!(scanner.finish().is_clean());
    }

    #[test]
    fn test_nameless_start_while_open_keeps_table_open() {
        let tally = scan("CREATE TABLE A (\nPRIMARY KEY (ID)\nCREATE TABLE\n);");
        assert_eq!(tally.get(AnomalyKind::TablesWithoutPrimaryKey), 1);
        assert_eq!(tally.get(AnomalyKind::TablesWithoutIndexes), 2);
    }

    #[test]
    fn test_empty_name_closes_scan() {
        let tally = scan("CREATE TABLE A (\nCREATE TABLE (\nID INTEGER,\n);");
        assert_eq!(tally.get(AnomalyKind::TablesWithoutPrimaryKey), 1);
        assert_eq!(tally.get(AnomalyKind::NullableColumns), 0);
    }
}
