//! Defectbench - Temporal Benchmark Harness for Bug-Inducing Commit Prediction
//!
//! Defectbench evaluates just-in-time defect predictors on per-project commit
//! tables. Every table carries commit metadata, churn, feature columns and a
//! bug matrix of `induces__<bug>__<fix commit>__<fix date>` columns linking
//! each commit to the bugs it introduced. Splits are strictly temporal and
//! labels only reflect bug fixes known before the test window opens.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                             DEFECTBENCH                             │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │  ProjectStore → Split/Aggregate → fit/predict → score → ledger      │
//! │    (csv.gz)       (labels)        Classifier     MCC, cost   (csv)  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use defectbench::prelude::*;
//!
//! let config = BenchmarkConfig::new("data", "scores", "baseline", SplitConfig::new(3, 250));
//! let report = run_benchmark(&config, |summary| println!("{}", summary.to_ascii()))?;
//! assert!(report.is_success());
//! # Ok::<(), defectbench::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`data`] - Project tables, bug matrix, loaders and the results ledger
//! - [`features`] - Generated feature-name sets and feature selection
//! - [`ml`] - Temporal splits, cross-project training, classifiers, scoring
//! - [`harness`] - Benchmark driver and run report

// Note: Lint configuration is in Cargo.toml [lints]
#![forbid(unsafe_code)]

pub mod data;
pub mod error;
pub mod features;
pub mod harness;
pub mod ml;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::{ProjectStore, ProjectTable, ResultsLedger};
    pub use crate::features::{FeatureSelection, FeatureSet};
    pub use crate::harness::{run_benchmark, BenchmarkConfig, Mode, RunReport, RunSummary};
    pub use crate::ml::{
        build_augmented_training, score, split_within_project, Classifier, ClassifierKind,
        DatasetSplit, MetricValue, ScoreRecord, SplitConfig,
    };
    pub use crate::{Error, Result};
}
