//! Type definitions for schema anomaly tallies.
//!
//! - [`AnomalyKind`] - The closed set of heuristic anomaly kinds
//! - [`AnomalyTally`] - Per-file (or aggregated) counts for every kind

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign}
};

use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Kind of heuristically detected schema anomaly.
///
/// Anomalies are possibly-benign characteristics surfaced for human review,
/// not correctness violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Table closed without any `PRIMARY KEY` line
    TablesWithoutPrimaryKey,
    /// Table closed without an index marker while it was open
    TablesWithoutIndexes,
    /// Table with exactly one recognized column definition
    TablesWithSingleColumn,
    /// `FKY_` named line without a `FOREIGN KEY` constraint on it
    MissingForeignKeys,
    /// Table name longer than [`LONG_TABLE_NAME_LIMIT`] characters
    LongTableNames,
    /// Mid-list column declaration without `NOT NULL` or `DEFAULT`
    NullableColumns
}

/// Table names longer than this many characters are reported.
pub const LONG_TABLE_NAME_LIMIT: usize = 30;

impl AnomalyKind {
    /// All kinds in report order.
    pub const ALL: [AnomalyKind; 6] = [
        Self::TablesWithoutPrimaryKey,
        Self::TablesWithoutIndexes,
        Self::TablesWithSingleColumn,
        Self::MissingForeignKeys,
        Self::LongTableNames,
        Self::NullableColumns
    ];

    /// Stable snake_case key used in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            Self::TablesWithoutPrimaryKey => "tables_without_primary_key",
            Self::TablesWithoutIndexes => "tables_without_indexes",
            Self::TablesWithSingleColumn => "tables_with_single_column",
            Self::MissingForeignKeys => "missing_foreign_keys",
            Self::LongTableNames => "long_table_names",
            Self::NullableColumns => "nullable_columns"
        }
    }

    /// Human-readable label used in console and HTML output.
    pub fn label(self) -> &'static str {
        match self {
            Self::TablesWithoutPrimaryKey => "Tables without primary keys",
            Self::TablesWithoutIndexes => "Tables without indexes",
            Self::TablesWithSingleColumn => "Single column tables",
            Self::MissingForeignKeys => "Potential missing foreign keys",
            Self::LongTableNames => "Long table names (>30 chars)",
            Self::NullableColumns => "Nullable columns"
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::TablesWithoutPrimaryKey => 0,
            Self::TablesWithoutIndexes => 1,
            Self::TablesWithSingleColumn => 2,
            Self::MissingForeignKeys => 3,
            Self::LongTableNames => 4,
            Self::NullableColumns => 5
        }
    }
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Count of each anomaly kind.
///
/// The total is always derived from the individual counters and can never be
/// set on its own.
///
/// # Example
///
/// ```
/// use sql_schema_report::anomaly::{AnomalyKind, AnomalyTally};
///
/// let mut tally = AnomalyTally::default();
/// tally.increment(AnomalyKind::NullableColumns);
/// tally.increment(AnomalyKind::LongTableNames);
///
/// assert_eq!(tally.get(AnomalyKind::NullableColumns), 1);
/// assert_eq!(tally.total(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnomalyTally {
    counts: [usize; 6]
}

impl AnomalyTally {
    /// Count recorded for `kind`.
    pub fn get(&self, kind: AnomalyKind) -> usize {
        self.counts[kind.slot()]
    }

    /// Record one more occurrence of `kind`.
    pub fn increment(&mut self, kind: AnomalyKind) {
        self.counts[kind.slot()] += 1;
    }

    /// Sum of all kind counters.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `true` when no anomaly of any kind was recorded.
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Iterate `(kind, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (AnomalyKind, usize)> + '_ {
        AnomalyKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

impl AddAssign<&AnomalyTally> for AnomalyTally {
    fn add_assign(&mut self, rhs: &AnomalyTally) {
        for (lhs, rhs) in self.counts.iter_mut().zip(rhs.counts) {
            *lhs += rhs;
        }
    }
}

impl Add for AnomalyTally {
    type Output = AnomalyTally;

    fn add(mut self, rhs: AnomalyTally) -> AnomalyTally {
        self += &rhs;
        self
    }
}

impl<'a> Sum<&'a AnomalyTally> for AnomalyTally {
    fn sum<I: Iterator<Item = &'a AnomalyTally>>(iter: I) -> Self {
        iter.fold(AnomalyTally::default(), |mut acc, tally| {
            acc += tally;
            acc
        })
    }
}

impl Serialize for AnomalyTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnomalyTally", 7)?;
        for (kind, count) in self.iter() {
            state.serialize_field(kind.key(), &count)?;
        }
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tally_is_clean() {
        let tally = AnomalyTally::default();
        assert!(tally.is_clean());
        assert!(tally.iter().all(|(_, count)| count == 0));
    }

    #[test]
    fn test_total_tracks_every_kind() {
        let mut tally = AnomalyTally::default();
        for (i, kind) in AnomalyKind::ALL.into_iter().enumerate() {
            for _ in 0..=i {
                tally.increment(kind);
            }
        }
        assert_eq!(tally.total(), 1 + 2 + 3 + 4 + 5 + 6);
        assert_eq!(tally.get(AnomalyKind::NullableColumns), 6);
    }

    #[test]
    fn test_sum_is_kind_wise() {
        let mut a = AnomalyTally::default();
        a.increment(AnomalyKind::TablesWithoutIndexes);
        let mut b = AnomalyTally::default();
        b.increment(AnomalyKind::TablesWithoutIndexes);
        b.increment(AnomalyKind::MissingForeignKeys);

        let sum: AnomalyTally = [a, b].iter().sum();
        assert_eq!(sum.get(AnomalyKind::TablesWithoutIndexes), 2);
        assert_eq!(sum.get(AnomalyKind::MissingForeignKeys), 1);
        assert_eq!(sum.total(), 3);
        assert_eq!(a + b, sum);
    }

    #[test]
    fn test_serialize_includes_total() {
        let mut tally = AnomalyTally::default();
        tally.increment(AnomalyKind::LongTableNames);
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(json["long_table_names"], 1);
        assert_eq!(json["nullable_columns"], 0);
        assert_eq!(json["total"], 1);
    }

    #[test]
    fn test_kind_display_uses_key() {
        assert_eq!(
            AnomalyKind::TablesWithoutPrimaryKey.to_string(),
            "tables_without_primary_key"
        );
    }
}
