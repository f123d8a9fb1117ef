//! Cost-aware scoring
//!
//! Scores compare predictions against the full test bug matrix, where each
//! column is one historical bug:
//!
//! - `mcc`: Matthews correlation between true labels and predictions
//! - `c_lower`: effort of predicted-positive rows per caught bug
//! - `c_upper`: effort of predicted-negative rows per missed bug
//! - `cost_N`: predicted-positive effort plus `N` per missed bug
//!
//! A bug is caught when every row blamed for it was predicted positive.
//! Effort of a row is lines added plus lines deleted.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::split::Partition;
use crate::{Error, Result};

/// Penalties per missed bug reported as `cost_<N>`
pub const MISSED_BUG_COSTS: [u32; 2] = [1000, 10_000];

/// Confusion matrix for binary classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// True positives (predicted positive, actual positive)
    pub tp: usize,
    /// True negatives (predicted negative, actual negative)
    pub tn: usize,
    /// False positives (predicted positive, actual negative)
    pub fp: usize,
    /// False negatives (predicted negative, actual positive)
    pub r#fn: usize,
}

impl ConfusionMatrix {
    /// Create confusion matrix from predictions and ground truth
    #[must_use]
    pub fn from_predictions(predictions: &[bool], ground_truth: &[bool]) -> Self {
        let mut matrix = Self::default();

        for (pred, truth) in predictions.iter().zip(ground_truth.iter()) {
            match (pred, truth) {
                (true, true) => matrix.tp += 1,
                (false, false) => matrix.tn += 1,
                (true, false) => matrix.fp += 1,
                (false, true) => matrix.r#fn += 1,
            }
        }

        matrix
    }

    /// Total number of samples
    #[must_use]
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.r#fn
    }

    /// Precision = TP / (TP + FP)
    #[must_use]
    pub fn precision(&self) -> f64 {
        let denom = self.tp + self.fp;
        if denom == 0 {
            return 0.0;
        }
        self.tp as f64 / denom as f64
    }

    /// Recall (sensitivity) = TP / (TP + FN)
    #[must_use]
    pub fn recall(&self) -> f64 {
        let denom = self.tp + self.r#fn;
        if denom == 0 {
            return 0.0;
        }
        self.tp as f64 / denom as f64
    }

    /// Matthews correlation coefficient
    ///
    /// `(TP·TN − FP·FN) / sqrt((TP+FP)(TP+FN)(TN+FP)(TN+FN))`, or 0 when any
    /// marginal is empty.
    #[must_use]
    pub fn mcc(&self) -> f64 {
        let (tp, tn, fp, fn_) = (
            self.tp as f64,
            self.tn as f64,
            self.fp as f64,
            self.r#fn as f64,
        );
        let denom = ((tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_)).sqrt();
        if denom == 0.0 {
            return 0.0;
        }
        (tp * tn - fp * fn_) / denom
    }

    /// Render as ASCII table
    #[must_use]
    pub fn to_ascii(&self) -> String {
        format!(
            r"
Confusion Matrix
================
                 Predicted
              Pos      Neg
Actual Pos   {:>5}    {:>5}   (TP, FN)
Actual Neg   {:>5}    {:>5}   (FP, TN)

Precision: {:.3}
Recall:    {:.3}
MCC:       {:.3}
",
            self.tp,
            self.r#fn,
            self.fp,
            self.tn,
            self.precision(),
            self.recall(),
            self.mcc()
        )
    }
}

/// A metric value, or an explicit marker for a zero denominator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Well-defined value
    Value(f64),
    /// Division by zero
    Undefined,
}

impl MetricValue {
    /// `numerator / denominator`, undefined for a zero denominator
    #[must_use]
    pub fn ratio(numerator: f64, denominator: usize) -> Self {
        if denominator == 0 {
            Self::Undefined
        } else {
            Self::Value(numerator / denominator as f64)
        }
    }

    /// The value, if defined
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined => None,
        }
    }

    /// Whether the value is undefined
    #[must_use]
    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for MetricValue {
    /// Undefined values render as an empty string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Undefined => Ok(()),
        }
    }
}

/// Metrics of one (approach, project) run, in ledger column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    metrics: Vec<(String, MetricValue)>,
    confusion: ConfusionMatrix,
    caught: usize,
    missed: usize,
}

impl ScoreRecord {
    /// Metric names in ledger column order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|(n, _)| n.as_str())
    }

    /// Metric values in ledger column order
    pub fn values(&self) -> impl Iterator<Item = MetricValue> + '_ {
        self.metrics.iter().map(|(_, v)| *v)
    }

    /// Named metrics in order
    #[must_use]
    pub fn metrics(&self) -> &[(String, MetricValue)] {
        &self.metrics
    }

    /// Look up a metric
    #[must_use]
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.metrics.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// Confusion matrix behind `mcc`
    #[must_use]
    pub fn confusion(&self) -> ConfusionMatrix {
        self.confusion
    }

    /// Bugs whose every inducing row was predicted positive
    #[must_use]
    pub fn bugs_caught(&self) -> usize {
        self.caught
    }

    /// Bugs with at least one inducing row predicted negative
    #[must_use]
    pub fn bugs_missed(&self) -> usize {
        self.missed
    }
}

/// Score predictions against a test partition
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if predictions are not aligned with
/// the test rows, or [`Error::Data`] if the partition's bug matrix has
/// already been closed
pub fn score(test: &Partition, predictions: &[bool]) -> Result<ScoreRecord> {
    if predictions.len() != test.len() {
        return Err(Error::LengthMismatch {
            expected: test.len(),
            actual: predictions.len(),
        });
    }
    let matrix = test
        .bug_matrix
        .as_ref()
        .ok_or_else(|| Error::Data("test partition has no bug matrix".to_string()))?;

    let confusion = ConfusionMatrix::from_predictions(predictions, &test.labels);

    let (effort_pos, effort_neg) = test.records.iter().zip(predictions).fold(
        (0.0, 0.0),
        |(pos, neg), (record, &predicted)| {
            if predicted {
                (pos + record.effort(), neg)
            } else {
                (pos, neg + record.effort())
            }
        },
    );

    let caught = matrix
        .column_sums()
        .iter()
        .zip(matrix.column_sums_where(predictions))
        .filter(|&(&all, flagged)| all == flagged)
        .count();
    let missed = matrix.n_columns() - caught;

    let mut metrics = vec![
        ("mcc".to_string(), MetricValue::Value(confusion.mcc())),
        ("c_lower".to_string(), MetricValue::ratio(effort_pos, caught)),
        ("c_upper".to_string(), MetricValue::ratio(effort_neg, missed)),
    ];
    for n in MISSED_BUG_COSTS {
        let cost = effort_pos + f64::from(n) * missed as f64;
        metrics.push((format!("cost_{n}"), MetricValue::Value(cost)));
    }

    for (name, value) in &metrics {
        if value.is_undefined() {
            tracing::warn!(metric = %name, caught, missed, "metric undefined (division by zero)");
        }
    }

    Ok(ScoreRecord {
        metrics,
        confusion,
        caught,
        missed,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::data::{BugFix, Churn, ProjectTableBuilder};
    use crate::ml::labels::ground_truth;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn partition(rows: &[(u16, u16, [bool; 3])]) -> Partition {
        let t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let fixes = (0..3)
            .map(|i| BugFix::new("induces", &format!("B{i}"), "f", t))
            .collect();
        let mut builder = ProjectTableBuilder::new("p", &[], fixes);
        for (i, (la, ld, flags)) in rows.iter().enumerate() {
            builder = builder
                .commit(
                    &format!("c{i}"),
                    t,
                    Churn::new(f64::from(*la), f64::from(*ld)),
                    vec![],
                    flags.to_vec(),
                )
                .unwrap();
        }
        let frame = builder.build().unwrap().frame;
        let labels = ground_truth(&frame);
        Partition::with_matrix(frame, labels).unwrap()
    }

    proptest! {
        #[test]
        fn prop_score_is_deterministic_and_consistent(
            rows in prop::collection::vec((0u16..500, 0u16..500, any::<[bool; 3]>()), 1..30),
            seed in any::<u64>(),
        ) {
            let test = partition(&rows);
            let predictions: Vec<bool> = (0..rows.len()).map(|i| (seed >> (i % 64)) & 1 == 1).collect();

            let a = score(&test, &predictions).unwrap();
            let b = score(&test, &predictions).unwrap();
            prop_assert_eq!(&a, &b);

            prop_assert_eq!(a.bugs_caught() + a.bugs_missed(), 3);
            let mcc = a.get("mcc").and_then(MetricValue::value).unwrap();
            prop_assert!((-1.0..=1.0).contains(&mcc));

            let cost_low = a.get("cost_1000").and_then(MetricValue::value).unwrap();
            let cost_high = a.get("cost_10000").and_then(MetricValue::value).unwrap();
            prop_assert!(cost_high >= cost_low);
        }
    }
}
