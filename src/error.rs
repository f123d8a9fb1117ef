//! Error types for defectbench
//!
//! Usage errors (missing cutoff, malformed bug-matrix columns, bad
//! configuration) abort immediately. Data errors are fatal for one project
//! only; the benchmark driver wraps them in [`Error::Project`] together with
//! the failing [`Stage`] and moves on to the next project.

use std::fmt;

use thiserror::Error;

/// Result type alias for defectbench operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage a per-project failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Reading the project table
    Load,
    /// Temporal split or cross-project aggregation
    Split,
    /// Classifier training
    Fit,
    /// Classifier inference
    Predict,
    /// Cost-aware scoring
    Score,
    /// Appending to the results ledger
    Append,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Split => write!(f, "split"),
            Self::Fit => write!(f, "fit"),
            Self::Predict => write!(f, "predict"),
            Self::Score => write!(f, "score"),
            Self::Append => write!(f, "append"),
        }
    }
}

/// Errors that can occur during defectbench operations
#[derive(Error, Debug)]
pub enum Error {
    /// Label derivation was asked to run without a cutoff date
    #[error("usage error: label derivation requires a cutoff date")]
    MissingCutoff,

    /// A bug-matrix column name is not `<marker>__<bug_id>__<fix_commit>__<fix_date>`
    #[error("usage error: malformed bug-matrix column '{column}': {reason}")]
    MalformedBugColumn {
        /// Offending column name
        column: String,
        /// What could not be parsed
        reason: String,
    },

    /// A timestamp cell or descriptor could not be parsed
    #[error("invalid timestamp '{value}'")]
    InvalidTimestamp {
        /// Raw value
        value: String,
    },

    /// Project file has no commit rows
    #[error("data error: project '{0}' has no commits")]
    EmptyProject(String),

    /// Project has fewer distinct commits than the requested test set
    #[error(
        "data error: project '{project}' has {available} distinct commits, {requested} requested for testing"
    )]
    InsufficientCommits {
        /// Project name
        project: String,
        /// Distinct commits available
        available: usize,
        /// Requested test-set size
        requested: usize,
    },

    /// Project name not present in the store
    #[error("unknown project '{0}'")]
    UnknownProject(String),

    /// Selected feature column is missing from a project table
    #[error("feature column '{feature}' not found in project '{project}'")]
    UnknownFeature {
        /// Feature name
        feature: String,
        /// Project name
        project: String,
    },

    /// Predictions or labels not aligned with their rows
    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Number of rows
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Classifier collaborator failure
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Data pipeline error
    #[error("data error: {0}")]
    Data(String),

    /// Failure of one project's pipeline
    #[error("project '{project}' failed during {stage}: {source}")]
    Project {
        /// Project name
        project: String,
        /// Failing stage
        stage: Stage,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding or encoding error
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Attach project and stage context
    #[must_use]
    pub fn in_stage(self, project: impl Into<String>, stage: Stage) -> Self {
        Self::Project {
            project: project.into(),
            stage,
            source: Box::new(self),
        }
    }

    /// Whether this is a usage error that should abort the whole run
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        match self {
            Self::MissingCutoff | Self::MalformedBugColumn { .. } | Self::Configuration(_) => true,
            Self::Project { source, .. } => source.is_usage_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Load.to_string(), "load");
        assert_eq!(Stage::Append.to_string(), "append");
    }

    #[test]
    fn test_in_stage_message() {
        let err = Error::EmptyProject("ant".to_string()).in_stage("ant", Stage::Load);
        let msg = err.to_string();
        assert!(msg.contains("ant"));
        assert!(msg.contains("load"));
    }

    #[test]
    fn test_usage_error_classification() {
        assert!(Error::MissingCutoff.is_usage_error());
        assert!(Error::MissingCutoff.in_stage("p", Stage::Split).is_usage_error());
        assert!(!Error::EmptyProject("p".into()).is_usage_error());
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
