//! aprender-backed classifiers
//!
//! Random forest predicts hard labels; logistic regression predicts
//! positive-class probabilities, which the pipeline thresholds.

use aprender::classification::LogisticRegression as AprLogisticRegression;
use aprender::tree::RandomForestClassifier;
use aprender::Matrix;

use super::classifier::{Classifier, FeatureMatrix, Prediction};
use crate::{Error, Result};

/// Trees in the forest
pub const N_TREES: usize = 100;
/// Maximum tree depth
pub const MAX_DEPTH: usize = 10;
/// Logistic regression iterations
pub const MAX_ITER: usize = 1000;

#[allow(clippy::cast_possible_truncation)]
fn to_matrix(features: &FeatureMatrix) -> Result<Matrix<f32>> {
    let data = features.as_slice().iter().map(|&v| v as f32).collect();
    Matrix::from_vec(features.n_rows(), features.n_cols(), data)
        .map_err(|e| Error::Classifier(format!("Failed to create matrix: {e}")))
}

/// aprender's forest panics on an empty bootstrap range
fn ensure_rows(features: &FeatureMatrix) -> Result<()> {
    if features.n_rows() == 0 {
        return Err(Error::Classifier("no training rows".to_string()));
    }
    Ok(())
}

fn to_classes(labels: &[bool]) -> Vec<usize> {
    labels.iter().map(|&b| usize::from(b)).collect()
}

/// Random forest (deterministic for a fixed seed)
pub struct RandomForest {
    seed: u64,
    model: Option<RandomForestClassifier>,
}

impl std::fmt::Debug for RandomForest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomForest")
            .field("seed", &self.seed)
            .field("trained", &self.model.is_some())
            .finish_non_exhaustive()
    }
}

impl RandomForest {
    /// Untrained forest
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed, model: None }
    }
}

impl Classifier for RandomForest {
    fn name(&self) -> &str {
        "random-forest"
    }

    fn fit(&mut self, features: &FeatureMatrix, labels: &[bool]) -> Result<()> {
        ensure_rows(features)?;
        let x = to_matrix(features)?;
        let y = to_classes(labels);

        let mut model = RandomForestClassifier::new(N_TREES)
            .with_max_depth(MAX_DEPTH)
            .with_random_state(self.seed);
        model
            .fit(&x, &y)
            .map_err(|e| Error::Classifier(format!("Training failed: {e}")))?;

        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, features: &FeatureMatrix) -> Result<Prediction> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| Error::Classifier("random forest is not trained".to_string()))?;
        let x = to_matrix(features)?;
        Ok(Prediction::Labels(
            model.predict(&x).iter().map(|&c| c == 1).collect(),
        ))
    }
}

/// Logistic regression (probabilistic)
#[derive(Default)]
pub struct LogisticRegression {
    model: Option<AprLogisticRegression>,
}

impl std::fmt::Debug for LogisticRegression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogisticRegression")
            .field("trained", &self.model.is_some())
            .finish_non_exhaustive()
    }
}

impl LogisticRegression {
    /// Untrained model
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Classifier for LogisticRegression {
    fn name(&self) -> &str {
        "logistic-regression"
    }

    fn fit(&mut self, features: &FeatureMatrix, labels: &[bool]) -> Result<()> {
        ensure_rows(features)?;
        let x = to_matrix(features)?;
        let y = to_classes(labels);

        let mut model = AprLogisticRegression::new().with_max_iter(MAX_ITER);
        model
            .fit(&x, &y)
            .map_err(|e| Error::Classifier(format!("Training failed: {e}")))?;

        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, features: &FeatureMatrix) -> Result<Prediction> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| Error::Classifier("logistic regression is not trained".to_string()))?;
        let x = to_matrix(features)?;
        let positive = model.predict_proba(&x);
        Ok(Prediction::Probabilities(
            (0..positive.len())
                .map(|i| {
                    let p = f64::from(positive[i]);
                    [1.0 - p, p]
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Churn, ProjectTableBuilder};
    use crate::features::FeatureSelection;
    use chrono::{TimeZone, Utc};

    fn separable() -> (FeatureMatrix, Vec<bool>) {
        let t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let rows = [
            ([0.0, 0.0], false),
            ([0.5, 0.5], false),
            ([1.0, 0.0], false),
            ([5.0, 5.0], true),
            ([5.5, 5.5], true),
            ([6.0, 5.0], true),
        ];
        let mut builder = ProjectTableBuilder::new("p", &["la", "ld"], vec![]);
        for (i, (f, _)) in rows.iter().enumerate() {
            builder = builder
                .commit(&format!("c{i}"), t, Churn::default(), f.to_vec(), vec![])
                .unwrap();
        }
        let records = builder.build().unwrap().frame.records;
        let selection = FeatureSelection::Columns(vec!["la".into(), "ld".into()]);
        let x = FeatureMatrix::from_records(&records, &selection).unwrap();
        (x, rows.iter().map(|(_, l)| *l).collect())
    }

    #[test]
    fn test_random_forest_fit_predict() {
        let (x, y) = separable();
        let mut rf = RandomForest::new(42);
        rf.fit(&x, &y).unwrap();
        let labels = rf.predict(&x).unwrap().into_labels();
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn test_untrained_predict_fails() {
        let (x, _) = separable();
        assert!(RandomForest::new(1).predict(&x).is_err());
        assert!(LogisticRegression::new().predict(&x).is_err());
    }

    #[test]
    fn test_empty_training_set_is_an_error() {
        let empty = FeatureMatrix::empty(0);
        let err = RandomForest::new(1).fit(&empty, &[]).unwrap_err();
        assert!(matches!(err, Error::Classifier(_)));
        assert!(LogisticRegression::new().fit(&empty, &[]).is_err());
    }

    #[test]
    fn test_logistic_regression_probabilities() {
        let (x, y) = separable();
        let mut lr = LogisticRegression::new();
        lr.fit(&x, &y).unwrap();
        let Prediction::Probabilities(probs) = lr.predict(&x).unwrap() else {
            panic!("expected probabilities");
        };
        assert_eq!(probs.len(), 6);
        for p in probs {
            assert!((0.0..=1.0).contains(&p[1]));
            assert!((p[0] + p[1] - 1.0).abs() < 1e-9);
        }
    }
}
