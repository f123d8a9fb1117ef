//! Commit-level project tables
//!
//! A project table holds one row per commit (or per commit/file pair) in
//! the order the rows were stored, which is chronological. Each row carries
//! its feature vector, the churn pair used as the inspection-effort proxy,
//! and one flag per historical bug fix in the column-major [`BugMatrix`].
//!
//! # Modules
//!
//! - [`schema`] - column classification, bug-fix descriptors, cell parsing
//! - [`store`] - loading gzip-compressed CSV project tables
//! - [`ledger`] - append-only results ledger
//! - `parquet` - Parquet project tables (`parquet` feature)

pub mod ledger;
#[cfg(feature = "parquet")]
pub mod parquet;
pub mod schema;
pub mod store;

pub use ledger::ResultsLedger;
pub use schema::{BugFix, ColumnKind, TableSchema};
pub use store::{ProjectStore, RawTable};

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Lines added and deleted by a commit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Churn {
    /// Lines added (`la`)
    pub lines_added: f64,
    /// Lines deleted (`ld`)
    pub lines_deleted: f64,
}

impl Churn {
    /// Create a churn pair
    #[must_use]
    pub fn new(lines_added: f64, lines_deleted: f64) -> Self {
        Self {
            lines_added,
            lines_deleted,
        }
    }

    /// Inspection effort: lines added + lines deleted
    #[must_use]
    pub fn effort(&self) -> f64 {
        self.lines_added + self.lines_deleted
    }
}

/// Ordered feature columns of one project table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Build a schema from ordered column names
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Self { names, index }
    }

    /// Column names in table order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a named column
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Number of feature columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the schema has no feature columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One row of a project table
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    /// Project the commit belongs to
    pub project: Arc<str>,
    /// Commit identifier
    pub commit: String,
    /// Committer timestamp
    pub committer_date: DateTime<Utc>,
    /// Churn pair
    pub churn: Churn,
    /// Feature columns of the owning project
    pub schema: Arc<FeatureSchema>,
    /// Feature values aligned with `schema`
    pub features: Vec<f64>,
}

impl CommitRecord {
    /// Value of a named feature
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<f64> {
        self.schema
            .position(name)
            .and_then(|i| self.features.get(i).copied())
    }

    /// Inspection effort of this row
    #[must_use]
    pub fn effort(&self) -> f64 {
        self.churn.effort()
    }
}

/// Column-major bug matrix
///
/// `cells[c][r]` is true when row `r` is blamed for inducing the fix
/// described by column `c`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BugMatrix {
    columns: Vec<BugFix>,
    cells: Vec<Vec<bool>>,
    n_rows: usize,
}

impl BugMatrix {
    /// Create a matrix from column descriptors and column-major cells
    ///
    /// # Errors
    ///
    /// Returns an error if the cells do not match the column count or any
    /// column does not have `n_rows` entries
    pub fn new(columns: Vec<BugFix>, cells: Vec<Vec<bool>>, n_rows: usize) -> Result<Self> {
        if columns.len() != cells.len() {
            return Err(Error::LengthMismatch {
                expected: columns.len(),
                actual: cells.len(),
            });
        }
        if let Some(bad) = cells.iter().find(|c| c.len() != n_rows) {
            return Err(Error::LengthMismatch {
                expected: n_rows,
                actual: bad.len(),
            });
        }
        Ok(Self {
            columns,
            cells,
            n_rows,
        })
    }

    /// Matrix without any bug columns
    #[must_use]
    pub fn empty(n_rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            cells: Vec::new(),
            n_rows,
        }
    }

    /// Bug-fix descriptors in column order
    #[must_use]
    pub fn columns(&self) -> &[BugFix] {
        &self.columns
    }

    /// Flags of one column
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&[bool]> {
        self.cells.get(index).map(Vec::as_slice)
    }

    /// Number of rows
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of bug columns
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Flag at (row, column)
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        self.cells.get(column).and_then(|c| c.get(row)).copied()
    }

    /// Keep only the given rows, in the given order
    #[must_use]
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|col| rows.iter().map(|&r| col[r]).collect())
            .collect();
        Self {
            columns: self.columns.clone(),
            cells,
            n_rows: rows.len(),
        }
    }

    /// Drop every column for which `drop` returns true
    ///
    /// Returns the number of dropped columns.
    pub fn drop_columns(&mut self, mut drop: impl FnMut(&BugFix) -> bool) -> usize {
        let before = self.columns.len();
        let mut kept_columns = Vec::with_capacity(before);
        let mut kept_cells = Vec::with_capacity(before);
        for (fix, cells) in self.columns.drain(..).zip(self.cells.drain(..)) {
            if !drop(&fix) {
                kept_columns.push(fix);
                kept_cells.push(cells);
            }
        }
        self.columns = kept_columns;
        self.cells = kept_cells;
        before - self.columns.len()
    }

    /// Logical OR across all columns, per row
    #[must_use]
    pub fn any_per_row(&self) -> Vec<bool> {
        let mut flags = vec![false; self.n_rows];
        for col in &self.cells {
            for (flag, &cell) in flags.iter_mut().zip(col) {
                *flag |= cell;
            }
        }
        flags
    }

    /// Number of inducing rows per column
    #[must_use]
    pub fn column_sums(&self) -> Vec<usize> {
        self.cells
            .iter()
            .map(|col| col.iter().filter(|&&c| c).count())
            .collect()
    }

    /// Number of inducing rows per column, counting only rows where `mask` is true
    #[must_use]
    pub fn column_sums_where(&self, mask: &[bool]) -> Vec<usize> {
        self.cells
            .iter()
            .map(|col| {
                col.iter()
                    .zip(mask)
                    .filter(|&(&cell, &selected)| cell && selected)
                    .count()
            })
            .collect()
    }
}

/// Rows of a project table together with their aligned bug matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Rows in stored order
    pub records: Vec<CommitRecord>,
    /// Bug matrix aligned with `records`
    pub bug_matrix: BugMatrix,
}

impl Frame {
    /// Pair rows with their bug matrix
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix row count differs from the record count
    pub fn new(records: Vec<CommitRecord>, bug_matrix: BugMatrix) -> Result<Self> {
        if records.len() != bug_matrix.n_rows() {
            return Err(Error::LengthMismatch {
                expected: records.len(),
                actual: bug_matrix.n_rows(),
            });
        }
        Ok(Self {
            records,
            bug_matrix,
        })
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the frame has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows for which `keep` returns true, order preserved
    #[must_use]
    pub fn filter(&self, mut keep: impl FnMut(&CommitRecord) -> bool) -> Self {
        let rows: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| keep(*r))
            .map(|(i, _)| i)
            .collect();
        self.select_rows(&rows)
    }

    /// Keep only the given rows, in the given order
    #[must_use]
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        Self {
            records: rows.iter().map(|&i| self.records[i].clone()).collect(),
            bug_matrix: self.bug_matrix.select_rows(rows),
        }
    }

    /// Latest committer timestamp
    #[must_use]
    pub fn latest_commit_date(&self) -> Option<DateTime<Utc>> {
        self.records.iter().map(|r| r.committer_date).max()
    }

    /// Earliest committer timestamp
    #[must_use]
    pub fn earliest_commit_date(&self) -> Option<DateTime<Utc>> {
        self.records.iter().map(|r| r.committer_date).min()
    }

    /// Distinct commit identifiers in order of first appearance
    #[must_use]
    pub fn distinct_commits(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.commit.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// The `n` chronologically latest distinct commits, in stored order
    #[must_use]
    pub fn last_commits(&self, n: usize) -> Vec<&str> {
        let distinct = self.distinct_commits();
        let start = distinct.len().saturating_sub(n);
        distinct[start..].to_vec()
    }
}

/// One project's full commit table
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTable {
    /// Project name
    pub name: String,
    /// Feature columns of this project
    pub schema: Arc<FeatureSchema>,
    /// Rows and bug matrix
    pub frame: Frame,
}

impl ProjectTable {
    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.frame.len()
    }

    /// Whether the project has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Number of distinct commits
    #[must_use]
    pub fn num_commits(&self) -> usize {
        self.frame.distinct_commits().len()
    }
}

/// Builder for in-memory project tables
///
/// Used for synthetic projects; file-backed tables come from [`ProjectStore`].
#[derive(Debug)]
pub struct ProjectTableBuilder {
    name: Arc<str>,
    schema: Arc<FeatureSchema>,
    bug_columns: Vec<BugFix>,
    records: Vec<CommitRecord>,
    rows: Vec<Vec<bool>>,
}

impl ProjectTableBuilder {
    /// Start a project with the given feature columns and bug-fix descriptors
    #[must_use]
    pub fn new(name: &str, feature_names: &[&str], bug_columns: Vec<BugFix>) -> Self {
        let names = feature_names.iter().map(|n| (*n).to_string()).collect();
        Self {
            name: Arc::from(name),
            schema: Arc::new(FeatureSchema::new(names)),
            bug_columns,
            records: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Append a row
    ///
    /// # Errors
    ///
    /// Returns an error if `features` or `bug_flags` do not match the
    /// configured column counts
    pub fn commit(
        mut self,
        commit: &str,
        committer_date: DateTime<Utc>,
        churn: Churn,
        features: Vec<f64>,
        bug_flags: Vec<bool>,
    ) -> Result<Self> {
        if features.len() != self.schema.len() {
            return Err(Error::LengthMismatch {
                expected: self.schema.len(),
                actual: features.len(),
            });
        }
        if bug_flags.len() != self.bug_columns.len() {
            return Err(Error::LengthMismatch {
                expected: self.bug_columns.len(),
                actual: bug_flags.len(),
            });
        }
        self.records.push(CommitRecord {
            project: Arc::clone(&self.name),
            commit: commit.to_string(),
            committer_date,
            churn,
            schema: Arc::clone(&self.schema),
            features,
        });
        self.rows.push(bug_flags);
        Ok(self)
    }

    /// Finish the table
    ///
    /// # Errors
    ///
    /// Returns an error if the bug matrix cannot be assembled
    pub fn build(self) -> Result<ProjectTable> {
        let n_rows = self.records.len();
        let cells = (0..self.bug_columns.len())
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect();
        let matrix = BugMatrix::new(self.bug_columns, cells, n_rows)?;
        Ok(ProjectTable {
            name: self.name.to_string(),
            schema: self.schema,
            frame: Frame::new(self.records, matrix)?,
        })
    }
}
