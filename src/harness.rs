//! Benchmark driver
//!
//! Runs load → split → fit → predict → score → append for every project of
//! a data directory, sequentially. A data error fails only its project: it
//! is logged, recorded in the [`RunReport`] and the next project runs.
//! Usage errors abort the whole run.

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::{store, ProjectStore, ResultsLedger};
use crate::error::Stage;
use crate::features::FeatureSelection;
use crate::ml::{
    build_augmented_training, fit_predict, score, split_within_project, ClassifierKind,
    DatasetSplit, FeatureMatrix, ScoreRecord, SplitConfig,
};
use crate::{Error, Result};

/// How training data is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Train on the target project's own history
    #[default]
    WithinProject,
    /// Train on the target's history plus every other project's
    AllProjects,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithinProject => write!(f, "within-project"),
            Self::AllProjects => write!(f, "all-projects"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "within-project" | "within" | "wp" => Ok(Self::WithinProject),
            "all-projects" | "all" => Ok(Self::AllProjects),
            other => Err(Error::Configuration(format!("unknown mode '{other}'"))),
        }
    }
}

/// Settings of one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Directory of project tables
    pub data_dir: PathBuf,
    /// Directory of approach score tables
    pub scores_dir: PathBuf,
    /// Approach name (score table file stem)
    pub approach: String,
    /// Split parameters
    pub split: SplitConfig,
    /// Training data assembly
    pub mode: Mode,
    /// Classifier to train
    pub classifier: ClassifierKind,
    /// Columns handed to the classifier
    pub features: FeatureSelection,
    /// Fraction of training rows to keep, if subsampling
    pub train_fraction: Option<f64>,
    /// Seed for subsampling and classifiers
    pub seed: u64,
}

impl BenchmarkConfig {
    /// Configuration with baseline defaults
    #[must_use]
    pub fn new(
        data_dir: impl Into<PathBuf>,
        scores_dir: impl Into<PathBuf>,
        approach: impl Into<String>,
        split: SplitConfig,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            scores_dir: scores_dir.into(),
            approach: approach.into(),
            split,
            mode: Mode::default(),
            classifier: ClassifierKind::default(),
            features: FeatureSelection::default(),
            train_fraction: None,
            seed: 42,
        }
    }

    /// Set the mode
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the classifier
    #[must_use]
    pub fn classifier(mut self, classifier: ClassifierKind) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the feature selection
    #[must_use]
    pub fn features(mut self, features: FeatureSelection) -> Self {
        self.features = features;
        self
    }

    /// Subsample training rows
    #[must_use]
    pub fn train_fraction(mut self, fraction: Option<f64>) -> Self {
        self.train_fraction = fraction;
        self
    }

    /// Set the seed
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for an empty approach name, an empty
    /// feature selection, an out-of-range train fraction or an invalid split
    pub fn validate(&self) -> Result<()> {
        self.split.validate()?;
        if self.approach.trim().is_empty() {
            return Err(Error::Configuration("approach name is empty".to_string()));
        }
        if self.approach.contains(['/', '\\']) {
            return Err(Error::Configuration(format!(
                "approach name '{}' must not contain path separators",
                self.approach
            )));
        }
        if self.features.is_empty() {
            return Err(Error::Configuration("feature selection is empty".to_string()));
        }
        if let Some(f) = self.train_fraction {
            if !(f > 0.0 && f <= 1.0) {
                return Err(Error::Configuration(format!(
                    "train fraction must be in (0, 1], got {f}"
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of one scored project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Project name
    pub project: String,
    /// Training rows
    pub train_rows: usize,
    /// Inducing training rows
    pub train_positives: usize,
    /// Test rows
    pub test_rows: usize,
    /// Inducing test rows
    pub test_positives: usize,
    /// Scores appended to the ledger
    pub scores: ScoreRecord,
    /// Ledger file written
    pub ledger_path: PathBuf,
}

impl RunSummary {
    /// Console block: instance counts, one line per metric, confusion matrix
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.project);
        let _ = writeln!(
            out,
            "train instances: {} ({} positive)",
            self.train_rows, self.train_positives
        );
        let _ = writeln!(
            out,
            "test instances:  {} ({} positive)",
            self.test_rows, self.test_positives
        );
        for (name, value) in self.scores.metrics() {
            let shown = match value.value() {
                Some(v) => format!("{v}"),
                None => "undefined".to_string(),
            };
            let _ = writeln!(out, "{name:<16} {shown}");
        }
        out.push_str(&self.scores.confusion().to_ascii());
        out
    }
}

/// A project that could not be scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFailure {
    /// Project name
    pub project: String,
    /// Failing stage
    pub stage: Stage,
    /// Error message
    pub message: String,
}

/// Result of a whole benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Approach name
    pub approach: String,
    /// Training data assembly
    pub mode: Mode,
    /// Classifier used
    pub classifier: ClassifierKind,
    /// Split parameters
    pub split: SplitConfig,
    /// Scored projects, in processing order
    pub projects: Vec<RunSummary>,
    /// Projects that failed
    pub failures: Vec<ProjectFailure>,
}

impl RunReport {
    fn new(config: &BenchmarkConfig) -> Self {
        Self {
            approach: config.approach.clone(),
            mode: config.mode,
            classifier: config.classifier,
            split: config.split,
            projects: Vec::new(),
            failures: Vec::new(),
        }
    }

    fn record_failure(&mut self, error: Error) -> Result<()> {
        if error.is_usage_error() {
            return Err(error);
        }
        let (project, stage, message) = match &error {
            Error::Project {
                project,
                stage,
                source,
            } => (project.clone(), *stage, source.to_string()),
            other => (String::new(), Stage::Load, other.to_string()),
        };
        tracing::error!(%project, %stage, %message, "project failed");
        self.failures.push(ProjectFailure {
            project,
            stage,
            message,
        });
        Ok(())
    }

    /// Whether every project was scored
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Write the report as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Run the benchmark, calling `on_project` after each scored project
///
/// # Errors
///
/// Returns usage errors and failures to list the data directory; per-project
/// data errors are recorded in the report instead
pub fn run_benchmark(
    config: &BenchmarkConfig,
    mut on_project: impl FnMut(&RunSummary),
) -> Result<RunReport> {
    config.validate()?;
    let ledger = ResultsLedger::new(&config.scores_dir);
    let mut report = RunReport::new(config);
    let projects = store::list_projects(&config.data_dir)?;

    tracing::info!(
        approach = %config.approach,
        mode = %config.mode,
        classifier = %config.classifier,
        projects = projects.len(),
        "starting benchmark"
    );

    match config.mode {
        Mode::WithinProject => {
            for name in &projects {
                tracing::info!(project = %name, "processing");
                let outcome = store::load_project(&config.data_dir, name)
                    .map_err(|e| e.in_stage(name.as_str(), Stage::Load))
                    .and_then(|table| {
                        split_within_project(&table, &config.split)
                            .map_err(|e| e.in_stage(name.as_str(), Stage::Split))
                    })
                    .and_then(|split| evaluate(config, &ledger, split));
                match outcome {
                    Ok(summary) => {
                        on_project(&summary);
                        report.projects.push(summary);
                    }
                    Err(e) => report.record_failure(e)?,
                }
            }
        }
        Mode::AllProjects => {
            let mut all = ProjectStore::new();
            for name in &projects {
                match store::load_project(&config.data_dir, name) {
                    Ok(table) => all.insert(table),
                    Err(e) => report.record_failure(e.in_stage(name.as_str(), Stage::Load))?,
                }
            }
            for target in all.iter() {
                tracing::info!(project = %target.name, "processing");
                let outcome = build_augmented_training(target, &all, &config.split)
                    .map_err(|e| e.in_stage(target.name.as_str(), Stage::Split))
                    .and_then(|split| evaluate(config, &ledger, split));
                match outcome {
                    Ok(summary) => {
                        on_project(&summary);
                        report.projects.push(summary);
                    }
                    Err(e) => report.record_failure(e)?,
                }
            }
        }
    }

    tracing::info!(
        scored = report.projects.len(),
        failed = report.failures.len(),
        "benchmark finished"
    );
    Ok(report)
}

/// Fit, predict, score and append one split
fn evaluate(config: &BenchmarkConfig, ledger: &ResultsLedger, split: DatasetSplit) -> Result<RunSummary> {
    let DatasetSplit {
        project,
        train,
        test,
        test_start,
    } = split;
    let at = |stage: Stage| {
        let project = project.clone();
        move |e: Error| e.in_stage(project, stage)
    };

    let train = match config.train_fraction {
        Some(fraction) => train
            .sample_fraction(fraction, config.seed)
            .map_err(at(Stage::Split))?,
        None => train,
    };
    tracing::debug!(%project, %test_start, train = train.len(), test = test.len(), "prepared split");

    let mut classifier = config.classifier.build(config.seed).map_err(at(Stage::Fit))?;
    let (x_train, x_test) = if classifier.uses_features() {
        (
            FeatureMatrix::from_records(&train.records, &config.features).map_err(at(Stage::Fit))?,
            FeatureMatrix::from_records(&test.records, &config.features)
                .map_err(at(Stage::Predict))?,
        )
    } else {
        (FeatureMatrix::empty(train.len()), FeatureMatrix::empty(test.len()))
    };

    let predictions = fit_predict(classifier.as_mut(), &project, &x_train, &train.labels, &x_test)?;
    let scores = score(&test, &predictions).map_err(at(Stage::Score))?;
    let ledger_path = ledger
        .append_score(&config.approach, &project, &scores)
        .map_err(at(Stage::Append))?;

    tracing::info!(
        %project,
        classifier = classifier.name(),
        caught = scores.bugs_caught(),
        missed = scores.bugs_missed(),
        "scored"
    );

    Ok(RunSummary {
        train_rows: train.len(),
        train_positives: train.positives(),
        test_rows: test.len(),
        test_positives: test.positives(),
        scores,
        ledger_path,
        project,
    })
}
