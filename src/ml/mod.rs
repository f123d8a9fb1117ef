//! Temporal data preparation, classifiers and scoring
//!
//! # Pipeline
//!
//! ```text
//! ProjectTable ─► split / aggregate ─► Classifier::fit/predict ─► score ─► ledger
//!                    │
//!                    └─ labels (bug matrix ─► is_inducing, future fixes dropped)
//! ```
//!
//! - [`labels`] - label derivation with a fix-date cutoff
//! - [`split`] - within-project temporal split
//! - [`aggregate`] - cross-project training sets
//! - [`classifier`] - fit/predict contract and the always-inducing baseline
//! - [`evaluator`] - MCC and effort/cost metrics
//! - `aprender` - random forest and logistic regression (`ml` feature)

pub mod aggregate;
#[cfg(feature = "ml")]
pub mod aprender;
pub mod classifier;
pub mod evaluator;
pub mod labels;
pub mod split;

pub use aggregate::build_augmented_training;
pub use classifier::{
    fit_predict, AlwaysInducing, Classifier, ClassifierKind, FeatureMatrix, Prediction,
    DECISION_THRESHOLD,
};
pub use evaluator::{score, ConfusionMatrix, MetricValue, ScoreRecord, MISSED_BUG_COSTS};
pub use labels::{bugs_later_than, derive_labels};
pub use split::{
    split_within_project, DatasetSplit, Partition, SplitConfig, TRAIN_STALENESS_MONTHS,
};
