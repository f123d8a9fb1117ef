//! Append-only results ledger
//!
//! One CSV file per approach, `<dir>/<approach>.csv`, with a `project`
//! column followed by the metric columns. The header is written only when
//! the file is missing or empty; existing rows are never read or rewritten.
//!
//! The ledger assumes a single writer. Concurrent processes appending to
//! the same approach file are unsupported: header detection and row writes
//! are not synchronised between processes.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::ml::ScoreRecord;
use crate::Result;

/// Directory of per-approach score tables
#[derive(Debug, Clone)]
pub struct ResultsLedger {
    dir: PathBuf,
}

impl ResultsLedger {
    /// Ledger rooted at `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the approach files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of an approach's score table
    #[must_use]
    pub fn path_for(&self, approach: &str) -> PathBuf {
        self.dir.join(format!("{approach}.csv"))
    }

    /// Append one project's scores to the approach table
    ///
    /// Undefined metrics are written as empty cells. Returns the path
    /// written to.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written
    pub fn append_score(&self, approach: &str, project: &str, scores: &ScoreRecord) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(approach);

        let write_header = std::fs::metadata(&path).map_or(true, |m| m.len() == 0);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::Writer::from_writer(file);

        if write_header {
            let mut header = vec!["project"];
            header.extend(scores.names());
            writer.write_record(&header)?;
        }

        let mut row = vec![project.to_string()];
        row.extend(scores.values().map(|v| v.to_string()));
        writer.write_record(&row)?;
        writer.flush()?;

        tracing::debug!(approach, project, path = %path.display(), header = write_header, "appended scores");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BugFix, Churn, ProjectTableBuilder};
    use crate::ml::{evaluator::score, labels::ground_truth, Partition};
    use chrono::{TimeZone, Utc};

    fn scores(predictions: &[bool]) -> ScoreRecord {
        let t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let frame = ProjectTableBuilder::new("p", &[], vec![BugFix::new("induces", "A", "f", t)])
            .commit("a", t, Churn::new(1.0, 1.0), vec![], vec![true])
            .unwrap()
            .commit("b", t, Churn::new(2.0, 2.0), vec![], vec![false])
            .unwrap()
            .build()
            .unwrap()
            .frame;
        let labels = ground_truth(&frame);
        score(&Partition::with_matrix(frame, labels).unwrap(), predictions).unwrap()
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ResultsLedger::new(dir.path());

        for project in ["ant", "bcel", "commons-io"] {
            ledger.append_score("baseline", project, &scores(&[true, false])).unwrap();
        }

        let content = std::fs::read_to_string(ledger.path_for("baseline")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "project,mcc,c_lower,c_upper,cost_1000,cost_10000");
        assert!(lines[1].starts_with("ant,"));
        assert!(lines[2].starts_with("bcel,"));
        assert!(lines[3].starts_with("commons-io,"));
    }

    #[test]
    fn test_existing_empty_file_gets_header() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ResultsLedger::new(dir.path());
        std::fs::write(ledger.path_for("x"), "").unwrap();

        ledger.append_score("x", "p", &scores(&[true, true])).unwrap();
        let content = std::fs::read_to_string(ledger.path_for("x")).unwrap();
        assert!(content.starts_with("project,"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_undefined_metric_is_empty_cell() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ResultsLedger::new(dir.path());

        // the only bug is caught: c_upper divides by zero missed bugs
        let path = ledger.append_score("all", "p", &scores(&[true, true])).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let row: Vec<&str> = content.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(row.len(), 6);
        assert_eq!(row[3], "");
        assert_eq!(row[4], "6");
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ResultsLedger::new(dir.path().join("nested/scores"));
        let path = ledger.append_score("a", "p", &scores(&[false, false])).unwrap();
        assert!(path.is_file());
        assert_eq!(ledger.dir(), dir.path().join("nested/scores"));
    }
}
