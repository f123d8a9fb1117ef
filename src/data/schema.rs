//! Column classification for project tables
//!
//! Every input column is classified once, at load time, into a numeric
//! feature, a bug-matrix entry or metadata. Bug-matrix columns are named
//! `induces__<bug_id>__<fix_commit>__<fix_date>` and parse into a
//! [`BugFix`] descriptor.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Prefix marker of bug-matrix columns
pub const BUG_MATRIX_MARKER: &str = "induces";
/// Separator between the four parts of a bug-matrix column name
pub const BUG_COLUMN_SEPARATOR: &str = "__";
/// Commit identifier column
pub const COMMIT_COLUMN: &str = "commit";
/// Committer timestamp column
pub const COMMITTER_DATE_COLUMN: &str = "committer_date";
/// Project name column (added by the loader when absent)
pub const PROJECT_COLUMN: &str = "project";
/// Lines added column
pub const LINES_ADDED_COLUMN: &str = "la";
/// Lines deleted column
pub const LINES_DELETED_COLUMN: &str = "ld";

const METADATA_COLUMNS: &[&str] = &[COMMIT_COLUMN, COMMITTER_DATE_COLUMN, PROJECT_COLUMN];

/// Descriptor of one historical bug fix (one bug-matrix column)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BugFix {
    /// Column marker (`induces`)
    pub marker: String,
    /// Bug report identifier
    pub bug_id: String,
    /// Commit that fixed the bug
    pub fix_commit: String,
    /// When the fix was committed
    pub fix_date: DateTime<Utc>,
}

impl BugFix {
    /// Create a descriptor
    #[must_use]
    pub fn new(marker: &str, bug_id: &str, fix_commit: &str, fix_date: DateTime<Utc>) -> Self {
        Self {
            marker: marker.to_string(),
            bug_id: bug_id.to_string(),
            fix_commit: fix_commit.to_string(),
            fix_date,
        }
    }

    /// Whether a column name belongs to the bug matrix
    #[must_use]
    pub fn is_bug_column(column: &str) -> bool {
        column
            .strip_prefix(BUG_MATRIX_MARKER)
            .is_some_and(|rest| rest.starts_with(BUG_COLUMN_SEPARATOR))
    }

    /// Parse `<marker>__<bug_id>__<fix_commit>__<fix_date>`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedBugColumn`] unless the name has exactly four
    /// non-empty parts and a parseable fix date
    pub fn parse(column: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedBugColumn {
            column: column.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = column.split(BUG_COLUMN_SEPARATOR).collect();
        let [marker, bug_id, fix_commit, fix_date] = parts.as_slice() else {
            return Err(malformed(&format!(
                "expected 4 '{BUG_COLUMN_SEPARATOR}'-separated parts, found {}",
                parts.len()
            )));
        };
        if [marker, bug_id, fix_commit, fix_date]
            .iter()
            .any(|p| p.trim().is_empty())
        {
            return Err(malformed("empty descriptor part"));
        }

        let fix_date = parse_timestamp(fix_date)
            .map_err(|_| malformed(&format!("unparseable fix date '{fix_date}'")))?;

        Ok(Self::new(marker, bug_id, fix_commit, fix_date))
    }

    /// Column name this descriptor was parsed from
    #[must_use]
    pub fn column_name(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.marker,
            self.bug_id,
            self.fix_commit,
            self.fix_date.format("%Y-%m-%d %H:%M:%S%:z"),
            sep = BUG_COLUMN_SEPARATOR
        )
    }

    /// Whether the fix happened strictly after `cutoff`
    #[must_use]
    pub fn fixed_after(&self, cutoff: DateTime<Utc>) -> bool {
        self.fix_date > cutoff
    }
}

/// Role of an input column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Numeric feature
    Feature,
    /// Bug-matrix entry
    BugMatrix(BugFix),
    /// Identifier, timestamp or other non-numeric column
    Metadata,
}

/// Classified header of one project table
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    /// Kind of every input column, in input order
    pub kinds: Vec<ColumnKind>,
    /// Position of the commit identifier column
    pub commit: usize,
    /// Position of the committer timestamp column
    pub committer_date: usize,
    /// Position of the lines-added column
    pub lines_added: usize,
    /// Position of the lines-deleted column
    pub lines_deleted: usize,
}

impl TableSchema {
    /// Classify the columns of a table
    ///
    /// Bug-matrix and metadata columns are recognised by name; every other
    /// column is a feature unless one of its cells is neither a number, a
    /// boolean nor empty, in which case it is metadata.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed bug-matrix names or missing required
    /// columns
    pub fn infer(headers: &[String], rows: &[Vec<String>]) -> Result<Self> {
        let mut kinds = Vec::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            let kind = if BugFix::is_bug_column(name) {
                ColumnKind::BugMatrix(BugFix::parse(name)?)
            } else if METADATA_COLUMNS.contains(&name.as_str()) {
                ColumnKind::Metadata
            } else if rows
                .iter()
                .all(|row| row.get(i).map_or(true, |cell| parse_number(cell).is_some()))
            {
                ColumnKind::Feature
            } else {
                tracing::debug!(column = %name, "non-numeric column treated as metadata");
                ColumnKind::Metadata
            };
            kinds.push(kind);
        }

        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h == wanted)
                .ok_or_else(|| Error::Data(format!("required column '{wanted}' is missing")))
        };

        let lines_added = find(LINES_ADDED_COLUMN)?;
        let lines_deleted = find(LINES_DELETED_COLUMN)?;
        for (name, pos) in [
            (LINES_ADDED_COLUMN, lines_added),
            (LINES_DELETED_COLUMN, lines_deleted),
        ] {
            if kinds[pos] != ColumnKind::Feature {
                return Err(Error::Data(format!("column '{name}' is not numeric")));
            }
        }

        Ok(Self {
            commit: find(COMMIT_COLUMN)?,
            committer_date: find(COMMITTER_DATE_COLUMN)?,
            lines_added,
            lines_deleted,
            kinds,
        })
    }

    /// Positions of feature columns
    #[must_use]
    pub fn feature_positions(&self) -> Vec<usize> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == ColumnKind::Feature)
            .map(|(i, _)| i)
            .collect()
    }

    /// Positions and descriptors of bug-matrix columns
    #[must_use]
    pub fn bug_columns(&self) -> Vec<(usize, &BugFix)> {
        self.kinds
            .iter()
            .enumerate()
            .filter_map(|(i, k)| match k {
                ColumnKind::BugMatrix(fix) => Some((i, fix)),
                _ => None,
            })
            .collect()
    }
}

/// Parse a timestamp cell as UTC
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.f][±HH:MM]` and plain dates.
/// Values without an offset are taken as UTC.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if no supported format matches
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let v = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(v) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in [
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%.f%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
    ] {
        if let Ok(dt) = DateTime::parse_from_str(v, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(v, fmt) {
            return Ok(dt.and_utc());
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(v, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt.and_utc());
    }

    Err(Error::InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Parse a numeric cell
///
/// Booleans read as 1/0, empty cells as 0.
#[must_use]
pub fn parse_number(cell: &str) -> Option<f64> {
    let c = cell.trim();
    if c.is_empty() {
        return Some(0.0);
    }
    if let Ok(v) = c.parse::<f64>() {
        return Some(v);
    }
    parse_bool(c).map(|b| if b { 1.0 } else { 0.0 })
}

/// Parse a boolean cell (`True`/`False`, `1`/`0`, any case)
#[must_use]
pub fn parse_bool(cell: &str) -> Option<bool> {
    match cell.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "1.0" => Some(true),
        "false" | "0" | "0.0" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_bug_column() {
        let fix = BugFix::parse("induces__JIRA-12__abc123__2019-05-01 10:00:00").unwrap();
        assert_eq!(fix.marker, "induces");
        assert_eq!(fix.bug_id, "JIRA-12");
        assert_eq!(fix.fix_commit, "abc123");
        assert_eq!(fix.fix_date, Utc.with_ymd_and_hms(2019, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_bug_column_with_offset() {
        let fix = BugFix::parse("induces__B__c__2019-05-01 12:00:00+02:00").unwrap();
        assert_eq!(fix.fix_date, Utc.with_ymd_and_hms(2019, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_bug_column_wrong_arity() {
        let err = BugFix::parse("induces__B__2019-05-01").unwrap_err();
        assert!(matches!(err, Error::MalformedBugColumn { .. }));
        let err = BugFix::parse("induces__B__c__d__2019-05-01").unwrap_err();
        assert!(matches!(err, Error::MalformedBugColumn { .. }));
    }

    #[test]
    fn test_parse_bug_column_bad_date() {
        let err = BugFix::parse("induces__B__c__yesterday").unwrap_err();
        assert!(matches!(err, Error::MalformedBugColumn { .. }));
    }

    #[test]
    fn test_column_name_roundtrip() {
        let fix = BugFix::parse("induces__B-1__ff__2019-05-01 10:00:00+00:00").unwrap();
        assert_eq!(fix.column_name(), "induces__B-1__ff__2019-05-01 10:00:00+00:00");
        assert_eq!(BugFix::parse(&fix.column_name()).unwrap(), fix);
    }

    #[test]
    fn test_is_bug_column() {
        assert!(BugFix::is_bug_column("induces__a__b__c"));
        assert!(!BugFix::is_bug_column("induces_total"));
        assert!(!BugFix::is_bug_column("la"));
    }

    #[test]
    fn test_fixed_after_is_strict() {
        let t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let fix = BugFix::new("induces", "B", "c", t);
        assert!(!fix.fixed_after(t));
        assert!(fix.fixed_after(t - chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2018, 3, 4, 5, 6, 7).unwrap();
        for v in [
            "2018-03-04T05:06:07Z",
            "2018-03-04T05:06:07+00:00",
            "2018-03-04 05:06:07+00:00",
            "2018-03-04 05:06:07",
            "2018-03-04T05:06:07",
            "2018-03-04 07:06:07+02:00",
        ] {
            assert_eq!(parse_timestamp(v).unwrap(), expected, "{v}");
        }
        assert_eq!(
            parse_timestamp("2018-03-04").unwrap(),
            Utc.with_ymd_and_hms(2018, 3, 4, 0, 0, 0).unwrap()
        );
        assert!(parse_timestamp("not a date").is_err());
    }

    #[test]
    fn test_parse_number_and_bool() {
        assert_eq!(parse_number("3.5"), Some(3.5));
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("True"), Some(1.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_bool("FALSE"), Some(false));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn test_infer_schema() {
        let h = headers(&[
            "commit",
            "committer_date",
            "author",
            "la",
            "ld",
            "current_McCC_file",
            "induces__B__c__2019-01-01",
        ]);
        let rows = vec![row(&["a", "2018-01-01", "alice", "1", "2", "3.0", "False"])];
        let schema = TableSchema::infer(&h, &rows).unwrap();

        assert_eq!(schema.commit, 0);
        assert_eq!(schema.committer_date, 1);
        assert_eq!(schema.kinds[2], ColumnKind::Metadata);
        assert_eq!(schema.feature_positions(), vec![3, 4, 5]);
        assert_eq!(schema.bug_columns().len(), 1);
        assert_eq!(schema.bug_columns()[0].0, 6);
    }

    #[test]
    fn test_infer_schema_missing_required() {
        let h = headers(&["commit", "committer_date", "la"]);
        assert!(TableSchema::infer(&h, &[]).is_err());
    }

    #[test]
    fn test_infer_schema_malformed_bug_column() {
        let h = headers(&["commit", "committer_date", "la", "ld", "induces__broken"]);
        let err = TableSchema::infer(&h, &[]).unwrap_err();
        assert!(err.is_usage_error());
    }
}
