//! Cross-project training sets
//!
//! The target project is split exactly as in the within-project case. Its
//! provisional training rows, and every other project's rows dated before
//! the target's `test_start`, are relabelled against `test_start` and
//! merged with their bug matrices closed. The staleness trim is applied
//! once, to the merged set.

use std::collections::HashSet;

use super::labels::{derive_labels, ground_truth};
use super::split::{
    select_test, staleness_cutoff, DatasetSplit, Partition, SplitConfig, TestSelection,
};
use crate::data::{ProjectStore, ProjectTable};
use crate::Result;

/// Build the augmented training set for `target`
///
/// Other projects are visited in name order; `target` itself is skipped if
/// it is also present in `store`.
///
/// # Errors
///
/// Returns the data errors of the target split
pub fn build_augmented_training(
    target: &ProjectTable,
    store: &ProjectStore,
    config: &SplitConfig,
) -> Result<DatasetSplit> {
    let TestSelection {
        test,
        train,
        test_start,
    } = select_test(target, config)?;

    let (train, labels) = derive_labels(train, Some(test_start))?;
    let mut merged = Partition::without_matrix(train, labels)?;
    let own = merged.len();

    // forks can share commit hashes with the target
    let test_commits: HashSet<&str> = test.distinct_commits().into_iter().collect();

    for other in store.iter().filter(|p| p.name != target.name) {
        let before = other
            .frame
            .filter(|r| r.committer_date < test_start && !test_commits.contains(r.commit.as_str()));
        if before.is_empty() {
            tracing::debug!(project = %other.name, "no commits before test start");
            continue;
        }
        let (frame, labels) = derive_labels(before, Some(test_start))?;
        let rows = frame.len();
        merged.extend(Partition::without_matrix(frame, labels)?);
        tracing::debug!(project = %other.name, rows, "merged training rows");
    }

    let train_cutoff = staleness_cutoff(test_start)?;
    let train = merged.filter(|r| r.committer_date < train_cutoff);

    let test_labels = ground_truth(&test);
    let test = Partition::with_matrix(test, test_labels)?;

    tracing::info!(
        project = %target.name,
        own_rows = own,
        train = train.len(),
        train_positives = train.positives(),
        test = test.len(),
        test_positives = test.positives(),
        "cross-project split"
    );

    Ok(DatasetSplit {
        project: target.name.clone(),
        train,
        test,
        test_start,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::data::{BugFix, Churn, ProjectTableBuilder};
    use crate::ml::split::months_before;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    /// Commit ids repeat across projects, like forks sharing history
    fn project(name: &str, gaps: &[i64], fixes: &[i64], seed: &[bool]) -> ProjectTable {
        let base = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        let columns: Vec<BugFix> = fixes
            .iter()
            .enumerate()
            .map(|(i, &d)| BugFix::new("induces", &format!("{name}{i}"), "f", base + Duration::days(d)))
            .collect();
        let mut builder = ProjectTableBuilder::new(name, &[], columns);
        let mut t = base;
        for (i, gap) in gaps.iter().enumerate() {
            t += Duration::days(*gap);
            let flags = (0..fixes.len()).map(|c| seed[(i + c) % seed.len()]).collect();
            builder = builder
                .commit(&format!("c{}", i / 2), t, Churn::default(), vec![], flags)
                .unwrap();
        }
        builder.build().unwrap()
    }

    fn projects() -> impl Strategy<Value = Vec<(Vec<i64>, Vec<i64>, Vec<bool>)>> {
        prop::collection::vec(
            (
                prop::collection::vec(0i64..40, 4..40),
                prop::collection::vec(0i64..1200, 0..4),
                prop::collection::vec(any::<bool>(), 1..8),
            ),
            2..5,
        )
    }

    proptest! {
        #[test]
        fn prop_augmented_invariants(
            specs in projects(),
            drop in 0u32..4,
            n in 1usize..8,
        ) {
            let store: ProjectStore = specs
                .iter()
                .enumerate()
                .map(|(i, (gaps, fixes, seed))| project(&format!("p{i}"), gaps, fixes, seed))
                .collect();
            let target = store.get("p0").unwrap();
            let config = SplitConfig::new(drop, n);
            let Ok(split) = build_augmented_training(target, &store, &config) else {
                return Ok(());
            };

            prop_assert!(split.train.commits().is_disjoint(&split.test.commits()));
            prop_assert!(split.train.bug_matrix.is_none());

            let stale = staleness_cutoff(split.test_start).unwrap();
            for r in &split.train.records {
                prop_assert!(r.committer_date < stale);
            }

            let latest = target.frame.latest_commit_date().unwrap();
            let cutoff_end = months_before(latest, drop).unwrap();
            for r in &split.test.records {
                prop_assert!(r.committer_date < cutoff_end);
                prop_assert_eq!(&*r.project, "p0");
            }

            // a positive training label is backed by a fix known at test_start
            for (r, &label) in split.train.records.iter().zip(&split.train.labels) {
                if !label {
                    continue;
                }
                let source = store.get(&r.project).unwrap();
                let matrix = &source.frame.bug_matrix;
                let backed = source.frame.records.iter().enumerate().any(|(row, s)| {
                    s.commit == r.commit
                        && s.committer_date == r.committer_date
                        && matrix.columns().iter().enumerate().any(|(c, fix)| {
                            fix.fix_date <= split.test_start && matrix.get(row, c) == Some(true)
                        })
                });
                prop_assert!(backed);
            }
        }
    }
}
