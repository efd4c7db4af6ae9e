//! Line classification by substring matching.
//!
//! Each normalized line is filed under exactly one [`LineKind`]. Predicates
//! are checked in a fixed priority order and the first one that matches
//! claims the line, so a line that textually contains both a column type and
//! `PRIMARY KEY` is a column, never a primary-key marker.

use compact_str::CompactString;

/// Keywords that make a line look like a column declaration.
const COLUMN_TYPE_KEYWORDS: [&str; 5] = ["CHAR", "VARCHAR", "DECIMAL", "INTEGER", "DATE"];

/// Keywords that mark a type-bearing line as a statement rather than a column.
const STATEMENT_KEYWORDS: [&str; 3] = ["CREATE", "ALTER", "INDEX"];

/// Structural signal carried by one line of SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `CREATE TABLE` line.
    ///
    /// `name` is `None` when the line has fewer than three whitespace tokens.
    /// It may be `Some("")` when the third token consists only of `(` / `;`.
    TableStart { name: Option<CompactString> },
    /// Column declaration inside an open table.
    Column { nullable: bool },
    /// Type keyword inside an open table on a `CREATE`/`ALTER`/`INDEX` line.
    ///
    /// Claims the line without carrying a signal: a later predicate such as
    /// the primary-key or index check never sees it.
    TypedStatement,
    /// Line containing `PRIMARY KEY`
    PrimaryKey,
    /// `CREATE INDEX` or `CREATE UNIQUE INDEX`
    Index,
    /// `FKY_` named reference without a `FOREIGN KEY` on the same line
    MissingForeignKey,
    /// No signal
    Other
}

/// Normalize a raw source line for matching: trim and upper-case.
pub fn normalize_line(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Classify one normalized line.
///
/// `table_open` tells whether a table accumulator is currently live; column
/// detection only applies inside a table.
///
/// # Example
///
/// ```
/// use sql_schema_report::anomaly::{LineKind, classify_line};
///
/// assert_eq!(
///     classify_line("NAME VARCHAR(50),", true),
///     LineKind::Column { nullable: true }
/// );
/// assert_eq!(classify_line("NAME VARCHAR(50),", false), LineKind::Other);
/// assert_eq!(classify_line("PRIMARY KEY (ID)", true), LineKind::PrimaryKey);
/// ```
pub fn classify_line(line: &str, table_open: bool) -> LineKind {
    if line.starts_with("CREATE TABLE") {
        return LineKind::TableStart {
            name: table_name(line)
        };
    }

    if table_open && contains_any(line, &COLUMN_TYPE_KEYWORDS) {
        if contains_any(line, &STATEMENT_KEYWORDS) {
            return LineKind::TypedStatement;
        }
        let nullable =
            !line.contains("NOT NULL") && !line.contains("DEFAULT") && line.contains(',');
        return LineKind::Column { nullable };
    }

    // `ADD CONSTRAINT ... PRIMARY KEY` is covered by the plain containment check.
    if line.contains("PRIMARY KEY") {
        return LineKind::PrimaryKey;
    }

    if line.contains("CREATE INDEX") || line.contains("CREATE UNIQUE INDEX") {
        return LineKind::Index;
    }

    if line.contains("FKY_")
        && !line.contains("FOREIGN KEY")
        && (line.contains(',') || line.contains(';'))
    {
        return LineKind::MissingForeignKey;
    }

    LineKind::Other
}

/// Third whitespace token with `(` and `;` stripped from both ends.
fn table_name(line: &str) -> Option<CompactString> {
    line.split_whitespace()
        .nth(2)
        .map(|token| CompactString::from(token.trim_matches('(').trim_matches(';')))
}

fn contains_any(line: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| line.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_start_extracts_name() {
        assert_eq!(
            classify_line("CREATE TABLE CUSTOMER (", false),
            LineKind::TableStart {
                name: Some("CUSTOMER".into())
            }
        );
    }

    #[test]
    fn test_table_start_strips_attached_paren() {
        assert_eq!(
            classify_line("CREATE TABLE ORDERS(", true),
            LineKind::TableStart {
                name: Some("ORDERS".into())
            }
        );
        assert_eq!(
            classify_line("CREATE TABLE LOG;", true),
            LineKind::TableStart {
                name: Some("LOG".into())
            }
        );
    }

    #[test]
    fn test_table_start_without_name() {
        assert_eq!(
            classify_line("CREATE TABLE", false),
            LineKind::TableStart { name: None }
        );
    }

    #[test]
    fn test_table_start_with_empty_name() {
        assert_eq!(
            classify_line("CREATE TABLE (", false),
            LineKind::TableStart {
                name: Some("".into())
            }
        );
    }

    #[test]
    fn test_column_nullability_heuristic() {
        assert_eq!(
            classify_line("ID INTEGER NOT NULL,", true),
            LineKind::Column { nullable: false }
        );
        assert_eq!(
            classify_line("OPENED_ON DATE DEFAULT CURRENT DATE,", true),
            LineKind::Column { nullable: false }
        );
        assert_eq!(
            classify_line("NOTE CHAR(10)", true),
            LineKind::Column { nullable: false }
        );
        assert_eq!(
            classify_line("AMOUNT DECIMAL(10,2)", true),
            LineKind::Column { nullable: true }
        );
    }

    #[test]
    fn test_column_wins_over_primary_key() {
        assert_eq!(
            classify_line("ID INTEGER PRIMARY KEY,", true),
            LineKind::Column { nullable: true }
        );
    }

    #[test]
    fn test_typed_statement_claims_line() {
        assert_eq!(
            classify_line("CREATE INDEX IX_ORDER_DATE ON ORDERS (ORDER_DATE);", true),
            LineKind::TypedStatement
        );
        assert_eq!(
            classify_line("CREATE INDEX IX_ORDER_DATE ON ORDERS (ORDER_DATE);", false),
            LineKind::Index
        );
    }

    #[test]
    fn test_primary_key_outside_table() {
        assert_eq!(
            classify_line("ALTER TABLE T ADD CONSTRAINT PK_T PRIMARY KEY (ID);", false),
            LineKind::PrimaryKey
        );
    }

    #[test]
    fn test_unique_index() {
        assert_eq!(
            classify_line("CREATE UNIQUE INDEX UX_NAME ON T (NAME);", true),
            LineKind::Index
        );
    }

    #[test]
    fn test_missing_foreign_key_requires_separator() {
        assert_eq!(classify_line("FKY_CUSTOMER,", true), LineKind::MissingForeignKey);
        assert_eq!(classify_line("FKY_CUSTOMER", true), LineKind::Other);
        assert_eq!(
            classify_line("CONSTRAINT C1 FOREIGN KEY (FKY_CUSTOMER) REFERENCES C (ID),", true),
            LineKind::Other
        );
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("  create table x (\r"), "CREATE TABLE X (");
    }
}
