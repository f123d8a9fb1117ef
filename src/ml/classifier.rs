//! Classifier contract
//!
//! Any model that can be fit on a feature matrix and labels and then
//! predicts either labels or two-class probabilities plugs into the
//! benchmark. Probabilities are turned into labels by the pipeline with a
//! fixed 0.5 threshold on the positive class.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::CommitRecord;
use crate::error::Stage;
use crate::features::FeatureSelection;
use crate::{Error, Result};

/// Positive-class probability above which a row is predicted inducing
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Dense row-major feature matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    data: Vec<f64>,
    n_rows: usize,
}

impl FeatureMatrix {
    /// Select the named columns from every record, in selection order
    ///
    /// Records may come from different projects; each is resolved against
    /// its own table's columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFeature`] if a record's table lacks a
    /// selected column
    pub fn from_records(records: &[CommitRecord], selection: &FeatureSelection) -> Result<Self> {
        let names = selection.names();
        let mut data = Vec::with_capacity(records.len() * names.len());

        let mut cached: Option<(&CommitRecord, Vec<usize>)> = None;
        for record in records {
            let reuse = cached
                .as_ref()
                .is_some_and(|(prev, _)| std::sync::Arc::ptr_eq(&prev.schema, &record.schema));
            if !reuse {
                let positions = names
                    .iter()
                    .map(|&name| {
                        record.schema.position(name).ok_or_else(|| Error::UnknownFeature {
                            feature: name.to_string(),
                            project: record.project.to_string(),
                        })
                    })
                    .collect::<Result<Vec<usize>>>()?;
                cached = Some((record, positions));
            }
            if let Some((_, positions)) = &cached {
                data.extend(positions.iter().map(|&i| record.features[i]));
            }
        }

        Ok(Self {
            columns: names.into_iter().map(str::to_string).collect(),
            data,
            n_rows: records.len(),
        })
    }

    /// Matrix with rows but no columns
    #[must_use]
    pub fn empty(n_rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            data: Vec::new(),
            n_rows,
        }
    }

    /// Number of rows
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// One row
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        let w = self.n_cols();
        &self.data[i * w..(i + 1) * w]
    }

    /// Row-major values
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Output of a classifier
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// Hard labels
    Labels(Vec<bool>),
    /// `[P(clean), P(inducing)]` per row
    Probabilities(Vec<[f64; 2]>),
}

impl Prediction {
    /// Labels, thresholding probabilities at [`DECISION_THRESHOLD`]
    #[must_use]
    pub fn into_labels(self) -> Vec<bool> {
        match self {
            Self::Labels(labels) => labels,
            Self::Probabilities(probs) => {
                probs.iter().map(|p| p[1] > DECISION_THRESHOLD).collect()
            }
        }
    }

    /// Labels for exactly `n_rows` rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the prediction covers a
    /// different number of rows
    pub fn labels_for(self, n_rows: usize) -> Result<Vec<bool>> {
        if self.len() != n_rows {
            return Err(Error::LengthMismatch {
                expected: n_rows,
                actual: self.len(),
            });
        }
        Ok(self.into_labels())
    }

    /// Number of rows predicted
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Labels(l) => l.len(),
            Self::Probabilities(p) => p.len(),
        }
    }

    /// Whether nothing was predicted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A trainable binary classifier
pub trait Classifier {
    /// Short name for logs and reports
    fn name(&self) -> &str;

    /// Whether the classifier reads the feature matrix at all
    fn uses_features(&self) -> bool {
        true
    }

    /// Train on labelled rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::Classifier`] if training fails
    fn fit(&mut self, features: &FeatureMatrix, labels: &[bool]) -> Result<()>;

    /// Predict one label or probability pair per row
    ///
    /// # Errors
    ///
    /// Returns [`Error::Classifier`] if inference fails
    fn predict(&self, features: &FeatureMatrix) -> Result<Prediction>;
}

/// Predicts every row as inducing
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysInducing;

impl Classifier for AlwaysInducing {
    fn name(&self) -> &str {
        "always-inducing"
    }

    fn uses_features(&self) -> bool {
        false
    }

    fn fit(&mut self, _features: &FeatureMatrix, _labels: &[bool]) -> Result<()> {
        Ok(())
    }

    fn predict(&self, features: &FeatureMatrix) -> Result<Prediction> {
        Ok(Prediction::Labels(vec![true; features.n_rows()]))
    }
}

/// Selectable classifier implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierKind {
    /// [`AlwaysInducing`]
    #[default]
    AlwaysInducing,
    /// Random forest (`ml` feature)
    RandomForest,
    /// Logistic regression (`ml` feature)
    LogisticRegression,
}

impl ClassifierKind {
    /// All kinds
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::AlwaysInducing, Self::RandomForest, Self::LogisticRegression]
    }

    /// CLI spelling
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlwaysInducing => "always-inducing",
            Self::RandomForest => "random-forest",
            Self::LogisticRegression => "logistic-regression",
        }
    }

    /// Instantiate a fresh, untrained classifier
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the kind needs the `ml` feature
    /// and it is not enabled
    pub fn build(self, seed: u64) -> Result<Box<dyn Classifier>> {
        match self {
            Self::AlwaysInducing => Ok(Box::new(AlwaysInducing)),
            #[cfg(feature = "ml")]
            Self::RandomForest => Ok(Box::new(super::aprender::RandomForest::new(seed))),
            #[cfg(feature = "ml")]
            Self::LogisticRegression => Ok(Box::new(super::aprender::LogisticRegression::new())),
            #[cfg(not(feature = "ml"))]
            Self::RandomForest | Self::LogisticRegression => {
                let _ = seed;
                Err(Error::Configuration(format!(
                    "classifier '{self}' requires the 'ml' feature"
                )))
            }
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassifierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase().replace('_', "-");
        match s.as_str() {
            "always-inducing" | "all" | "baseline" => Ok(Self::AlwaysInducing),
            "random-forest" | "rf" => Ok(Self::RandomForest),
            "logistic-regression" | "lr" => Ok(Self::LogisticRegression),
            _ => Err(Error::Configuration(format!("unknown classifier '{s}'"))),
        }
    }
}

/// Fit on training rows and predict test rows of `project`
///
/// Errors are wrapped in [`Error::Project`] naming the failing stage.
///
/// # Errors
///
/// Returns any classifier error, or [`Error::LengthMismatch`] if the
/// classifier returns the wrong number of predictions
pub fn fit_predict(
    classifier: &mut dyn Classifier,
    project: &str,
    train: &FeatureMatrix,
    labels: &[bool],
    test: &FeatureMatrix,
) -> Result<Vec<bool>> {
    classifier
        .fit(train, labels)
        .map_err(|e| e.in_stage(project, Stage::Fit))?;
    classifier
        .predict(test)
        .and_then(|p| p.labels_for(test.n_rows()))
        .map_err(|e| e.in_stage(project, Stage::Predict))
}
