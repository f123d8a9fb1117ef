//! Leak-free temporal train/test splits
//!
//! The split of one project runs in a fixed order:
//!
//! 1. Drop every row at or after `latest - drop_months_end`.
//! 2. The test set is the last `num_test_commits` distinct commits of what
//!    remains; the rest is provisional training data.
//! 3. `test_start` is the earliest test timestamp. Training bug-matrix
//!    columns fixed after it are dropped before training labels are derived.
//! 4. Training rows at or after `test_start - 3 months` are dropped.
//! 5. Test labels come from the full test matrix.

use std::collections::HashSet;

use chrono::{DateTime, Months, Utc};
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::labels::{derive_labels, ground_truth};
use crate::data::{BugMatrix, CommitRecord, Frame, ProjectTable};
use crate::{Error, Result};

/// Months before `test_start` whose training rows are discarded
pub const TRAIN_STALENESS_MONTHS: u32 = 3;

/// Split parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Months trimmed from the end of each project
    pub drop_months_end: u32,
    /// Distinct commits held out for testing
    pub num_test_commits: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            drop_months_end: 3,
            num_test_commits: 250,
        }
    }
}

impl SplitConfig {
    /// Create a configuration
    #[must_use]
    pub fn new(drop_months_end: u32, num_test_commits: usize) -> Self {
        Self {
            drop_months_end,
            num_test_commits,
        }
    }

    /// Set the months trimmed from the project end
    #[must_use]
    pub fn drop_months_end(mut self, months: u32) -> Self {
        self.drop_months_end = months;
        self
    }

    /// Set the test-set size in distinct commits
    #[must_use]
    pub fn num_test_commits(mut self, n: usize) -> Self {
        self.num_test_commits = n;
        self
    }

    /// Check the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no test commits are requested
    pub fn validate(&self) -> Result<()> {
        if self.num_test_commits == 0 {
            return Err(Error::Configuration(
                "num_test_commits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Labelled rows of one side of a split
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Rows in chronological order
    pub records: Vec<CommitRecord>,
    /// One label per row
    pub labels: Vec<bool>,
    /// Bug matrix aligned with `records`, if still attached
    pub bug_matrix: Option<BugMatrix>,
}

impl Partition {
    /// Labelled rows that keep their bug matrix
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if labels and rows disagree
    pub fn with_matrix(frame: Frame, labels: Vec<bool>) -> Result<Self> {
        if labels.len() != frame.len() {
            return Err(Error::LengthMismatch {
                expected: frame.len(),
                actual: labels.len(),
            });
        }
        Ok(Self {
            records: frame.records,
            labels,
            bug_matrix: Some(frame.bug_matrix),
        })
    }

    /// Labelled rows whose bug matrix has been closed
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if labels and rows disagree
    pub fn without_matrix(frame: Frame, labels: Vec<bool>) -> Result<Self> {
        let mut partition = Self::with_matrix(frame, labels)?;
        partition.bug_matrix = None;
        Ok(partition)
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the partition has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of inducing rows
    #[must_use]
    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }

    /// Distinct commit identifiers
    #[must_use]
    pub fn commits(&self) -> HashSet<&str> {
        self.records.iter().map(|r| r.commit.as_str()).collect()
    }

    /// Keep only the given rows, in the given order
    #[must_use]
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        Self {
            records: rows.iter().map(|&i| self.records[i].clone()).collect(),
            labels: rows.iter().map(|&i| self.labels[i]).collect(),
            bug_matrix: self.bug_matrix.as_ref().map(|m| m.select_rows(rows)),
        }
    }

    /// Rows for which `keep` returns true
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

    /// Append another partition's rows; the merged partition has no matrix
    pub fn extend(&mut self, other: Self) {
        self.records.extend(other.records);
        self.labels.extend(other.labels);
        self.bug_matrix = None;
    }

    /// Seeded random subsample of `fraction` of the rows, order preserved
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] unless `0 < fraction <= 1`
    pub fn sample_fraction(&self, fraction: f64, seed: u64) -> Result<Self> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(Error::Configuration(format!(
                "train fraction must be in (0, 1], got {fraction}"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let amount = (self.len() as f64 * fraction).round() as usize;

        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut rows = rand::seq::index::sample(&mut rng, self.len(), amount.min(self.len()))
            .into_vec();
        rows.sort_unstable();
        Ok(self.select_rows(&rows))
    }
}

/// Train and test partitions of one target project
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSplit {
    /// Target project
    pub project: String,
    /// Training rows
    pub train: Partition,
    /// Held-out test rows (bug matrix attached)
    pub test: Partition,
    /// Earliest committer timestamp in the test set
    pub test_start: DateTime<Utc>,
}

/// Subtract whole calendar months
///
/// # Errors
///
/// Returns [`Error::Data`] if the result is out of range
pub fn months_before(date: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
    date.checked_sub_months(Months::new(months))
        .ok_or_else(|| Error::Data(format!("{date} minus {months} months is out of range")))
}

/// Earliest timestamp a training row may not reach
///
/// # Errors
///
/// Returns [`Error::Data`] if the date arithmetic overflows
pub fn staleness_cutoff(test_start: DateTime<Utc>) -> Result<DateTime<Utc>> {
    months_before(test_start, TRAIN_STALENESS_MONTHS)
}

/// Target-project test set and its provisional training rows
#[derive(Debug, Clone)]
pub(crate) struct TestSelection {
    pub test: Frame,
    pub train: Frame,
    pub test_start: DateTime<Utc>,
}

/// Steps 1 and 2: trim the project end and hold out the last commits
pub(crate) fn select_test(table: &ProjectTable, config: &SplitConfig) -> Result<TestSelection> {
    config.validate()?;
    if table.is_empty() {
        return Err(Error::EmptyProject(table.name.clone()));
    }

    let available = table.num_commits();
    if available < config.num_test_commits {
        return Err(Error::InsufficientCommits {
            project: table.name.clone(),
            available,
            requested: config.num_test_commits,
        });
    }

    let latest = table
        .frame
        .latest_commit_date()
        .ok_or_else(|| Error::EmptyProject(table.name.clone()))?;
    let cutoff_end = months_before(latest, config.drop_months_end)?;
    let trimmed = table.frame.filter(|r| r.committer_date < cutoff_end);
    if trimmed.is_empty() {
        return Err(Error::Data(format!(
            "project '{}' has no commits before {cutoff_end}",
            table.name
        )));
    }

    let test_commits: HashSet<String> = trimmed
        .last_commits(config.num_test_commits)
        .into_iter()
        .map(str::to_string)
        .collect();
    let test = trimmed.filter(|r| test_commits.contains(&r.commit));
    let train = trimmed.filter(|r| !test_commits.contains(&r.commit));

    let test_start = test
        .earliest_commit_date()
        .ok_or_else(|| Error::Data(format!("project '{}' has an empty test set", table.name)))?;

    tracing::debug!(
        project = %table.name,
        %cutoff_end,
        %test_start,
        dropped = table.len() - trimmed.len(),
        test_commits = test_commits.len(),
        "selected test commits"
    );

    Ok(TestSelection {
        test,
        train,
        test_start,
    })
}

/// Split one project into leak-free train and test partitions
///
/// # Errors
///
/// Returns a data error for empty projects, projects with fewer distinct
/// commits than requested, or an end trim that leaves nothing
pub fn split_within_project(table: &ProjectTable, config: &SplitConfig) -> Result<DatasetSplit> {
    let TestSelection {
        test,
        train,
        test_start,
    } = select_test(table, config)?;

    let (train, train_labels) = derive_labels(train, Some(test_start))?;
    let train_cutoff = staleness_cutoff(test_start)?;
    let train = Partition::with_matrix(train, train_labels)?
        .filter(|r| r.committer_date < train_cutoff);

    let test_labels = ground_truth(&test);
    let test = Partition::with_matrix(test, test_labels)?;

    tracing::info!(
        project = %table.name,
        train = train.len(),
        train_positives = train.positives(),
        test = test.len(),
        test_positives = test.positives(),
        "within-project split"
    );

    Ok(DatasetSplit {
        project: table.name.clone(),
        train,
        test,
        test_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BugFix, Churn, ProjectTableBuilder};
    use chrono::TimeZone;

    fn month(m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, m, 1, 0, 0, 0).unwrap()
    }

    /// One commit per month, January to December
    fn yearly_table() -> ProjectTable {
        let fixes = vec![
            BugFix::new("induces", "old", "fx1", month(6)),
            BugFix::new("induces", "new", "fx2", month(12)),
        ];
        let mut builder = ProjectTableBuilder::new("demo", &["la", "ld"], fixes);
        for m in 1..=12 {
            let flags = vec![m == 2, m == 3 || m == 10];
            builder = builder
                .commit(
                    &format!("c{m:02}"),
                    month(m),
                    Churn::new(f64::from(m), 1.0),
                    vec![f64::from(m), 1.0],
                    flags,
                )
                .unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = SplitConfig::default();
        assert_eq!(config.drop_months_end, 3);
        assert_eq!(config.num_test_commits, 250);
        assert!(SplitConfig::new(1, 0).validate().is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = SplitConfig::default().drop_months_end(1).num_test_commits(5);
        assert_eq!(config, SplitConfig::new(1, 5));
    }

    #[test]
    fn test_within_project_split() {
        let split = split_within_project(&yearly_table(), &SplitConfig::new(2, 3)).unwrap();

        // cutoff_end = Oct 1: Oct, Nov, Dec dropped; test = Jul, Aug, Sep
        assert_eq!(split.test_start, month(7));
        let test: Vec<&str> = split.test.records.iter().map(|r| r.commit.as_str()).collect();
        assert_eq!(test, vec!["c07", "c08", "c09"]);

        // train cutoff = Apr 1
        let train: Vec<&str> = split.train.records.iter().map(|r| r.commit.as_str()).collect();
        assert_eq!(train, vec!["c01", "c02", "c03"]);

        // "new" is fixed in December, after test_start, so c03 is clean
        assert_eq!(split.train.labels, vec![false, true, false]);
        let matrix = split.train.bug_matrix.as_ref().unwrap();
        assert_eq!(matrix.n_columns(), 1);
        assert_eq!(matrix.columns()[0].bug_id, "old");

        // test matrix is untouched
        assert_eq!(split.test.bug_matrix.as_ref().unwrap().n_columns(), 2);
        assert_eq!(split.test.labels, vec![false, false, false]);
    }

    #[test]
    fn test_multi_row_commit_counts_once() {
        let table = ProjectTableBuilder::new("p", &[], vec![])
            .commit("a", month(1), Churn::default(), vec![], vec![])
            .unwrap()
            .commit("b", month(2), Churn::default(), vec![], vec![])
            .unwrap()
            .commit("c", month(3), Churn::default(), vec![], vec![])
            .unwrap()
            .commit("c", month(3), Churn::default(), vec![], vec![])
            .unwrap()
            .commit("d", month(9), Churn::default(), vec![], vec![])
            .unwrap()
            .build()
            .unwrap();

        let split = split_within_project(&table, &SplitConfig::new(1, 2)).unwrap();
        assert_eq!(split.test.len(), 3);
        assert_eq!(split.test.commits().len(), 2);
        assert_eq!(split.test_start, month(2));
    }

    #[test]
    fn test_insufficient_commits() {
        let err = split_within_project(&yearly_table(), &SplitConfig::new(1, 13)).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientCommits {
                available: 12,
                requested: 13,
                ..
            }
        ));
    }

    #[test]
    fn test_test_set_shrinks_after_end_trim() {
        let split = split_within_project(&yearly_table(), &SplitConfig::new(6, 12)).unwrap();
        // Jan..May remain before Jun 1
        assert_eq!(split.test.commits().len(), 5);
        assert!(split.train.is_empty());
    }

    #[test]
    fn test_end_trim_leaving_nothing() {
        let table = ProjectTableBuilder::new("p", &[], vec![])
            .commit("a", month(5), Churn::default(), vec![], vec![])
            .unwrap()
            .build()
            .unwrap();
        assert!(split_within_project(&table, &SplitConfig::new(0, 1)).is_err());
    }

    #[test]
    fn test_staleness_cutoff() {
        assert_eq!(staleness_cutoff(month(7)).unwrap(), month(4));
        let end_of_may = Utc.with_ymd_and_hms(2020, 5, 31, 0, 0, 0).unwrap();
        assert_eq!(
            staleness_cutoff(end_of_may).unwrap(),
            Utc.with_ymd_and_hms(2020, 2, 29, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_sample_fraction() {
        let split = split_within_project(&yearly_table(), &SplitConfig::new(0, 2)).unwrap();
        let train = &split.train;
        let sample = train.sample_fraction(0.5, 42).unwrap();
        assert_eq!(sample.len(), (train.len() as f64 * 0.5).round() as usize);
        assert_eq!(sample, train.sample_fraction(0.5, 42).unwrap());

        let dates: Vec<_> = sample.records.iter().map(|r| r.committer_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);

        assert!(train.sample_fraction(0.0, 1).is_err());
        assert!(train.sample_fraction(1.5, 1).is_err());
        assert_eq!(train.sample_fraction(1.0, 7).unwrap().len(), train.len());
    }

    #[test]
    fn test_extend_drops_matrix() {
        let split = split_within_project(&yearly_table(), &SplitConfig::new(2, 3)).unwrap();
        let mut train = split.train.clone();
        train.extend(split.train);
        assert_eq!(train.len(), 6);
        assert!(train.bug_matrix.is_none());
    }
}
