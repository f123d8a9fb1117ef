//! End-to-end benchmark runs over synthetic gzip-compressed project tables

use std::fs::File;
use std::io::Write;
use std::path::Path;

use defectbench::error::Stage;
use defectbench::ml::Partition;
use defectbench::prelude::*;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Ten commits over a year. Bug A is fixed before the test window opens,
/// bug B after it.
const ALPHA: &str = "\
commit,committer_date,author,la,ld,ns,induces__A__fixa__2020-05-01,induces__B__fixb__2020-10-01
c01,2020-01-05 00:00:00,ann,1,1,1,True,False
c02,2020-02-05 00:00:00,bob,2,1,1,False,True
c03,2020-03-05 00:00:00,ann,3,1,2,False,False
c04,2020-04-05 00:00:00,cyd,4,0,1,False,False
c05,2020-05-05 00:00:00,bob,1,0,1,False,False
c06,2020-06-05 00:00:00,ann,2,2,1,False,False
c07,2020-07-05 00:00:00,cyd,5,1,3,False,True
c08,2020-09-05 00:00:00,bob,2,2,1,False,False
c09,2020-11-05 00:00:00,ann,10,0,2,False,False
c10,2020-12-20 00:00:00,cyd,7,7,1,False,False
";

/// Too few commits for a three-commit test set
const BETA: &str = "\
commit,committer_date,author,la,ld,ns,induces__C__fixc__2020-03-01
b1,2020-02-01 00:00:00,dee,3,3,1,True
b3,2020-08-01 00:00:00,eve,2,0,1,False
";

fn write_gz(dir: &Path, file: &str, content: &str) {
    let f = File::create(dir.join(file)).unwrap();
    let mut enc = GzEncoder::new(f, Compression::default());
    enc.write_all(content.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn commits(partition: &Partition) -> Vec<&str> {
    partition.records.iter().map(|r| r.commit.as_str()).collect()
}

fn data_dir(projects: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in projects {
        write_gz(dir.path(), &format!("{name}.csv.gz"), content);
    }
    dir
}

#[test]
fn test_within_project_split_and_labels() {
    let data = data_dir(&[("alpha", ALPHA)]);
    let table = ProjectStore::load_all(data.path())
        .unwrap()
        .get("alpha")
        .unwrap()
        .clone();

    let split = split_within_project(&table, &SplitConfig::new(1, 3)).unwrap();

    assert_eq!(commits(&split.test), vec!["c07", "c08", "c09"]);
    assert_eq!(commits(&split.train), vec!["c01", "c02", "c03"]);
    // bug B is fixed after the test window opens, so c02 is clean in training
    assert_eq!(split.train.labels, vec![true, false, false]);
    assert_eq!(split.test.labels, vec![true, false, false]);
    // only bug A survives in the training matrix
    let train_matrix = split.train.bug_matrix.as_ref().unwrap();
    assert_eq!(train_matrix.n_columns(), 1);
    assert_eq!(train_matrix.columns()[0].bug_id, "A");
    for fix in train_matrix.columns() {
        assert!(fix.fix_date <= split.test_start);
    }
    assert_eq!(split.test.bug_matrix.as_ref().unwrap().n_columns(), 2);
}

#[test]
fn test_baseline_run_writes_ledger() {
    let data = data_dir(&[("alpha", ALPHA)]);
    let scores = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::new(data.path(), scores.path(), "baseline", SplitConfig::new(1, 3));

    let mut seen = Vec::new();
    let report = run_benchmark(&config, |summary| seen.push(summary.project.clone())).unwrap();

    assert!(report.is_success());
    assert_eq!(seen, vec!["alpha"]);
    let summary = &report.projects[0];
    assert_eq!(summary.train_rows, 3);
    assert_eq!(summary.train_positives, 1);
    assert_eq!(summary.test_rows, 3);
    assert_eq!(summary.test_positives, 1);
    assert_eq!(summary.scores.bugs_caught(), 2);
    assert_eq!(summary.scores.bugs_missed(), 0);

    let content = std::fs::read_to_string(scores.path().join("baseline.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "project,mcc,c_lower,c_upper,cost_1000,cost_10000");
    // effort 6 + 4 + 10 over two caught bugs; nothing missed
    assert_eq!(lines[1], "alpha,0,10,,20,20");

    let ascii = summary.to_ascii();
    assert!(ascii.contains("train instances: 3 (1 positive)"));
    assert!(ascii.contains("Confusion Matrix"));
    assert!(ascii.lines().any(|l| l.starts_with("c_upper") && l.ends_with("undefined")));
}

#[test]
fn test_header_written_once_across_runs() {
    let data = data_dir(&[("alpha", ALPHA)]);
    let scores = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::new(data.path(), scores.path(), "baseline", SplitConfig::new(1, 3));

    run_benchmark(&config, |_| {}).unwrap();
    run_benchmark(&config, |_| {}).unwrap();

    let content = std::fs::read_to_string(scores.path().join("baseline.csv")).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert_eq!(content.matches("project,").count(), 1);
}

#[test]
fn test_failed_project_does_not_stop_run() {
    let data = data_dir(&[("alpha", ALPHA), ("beta", BETA)]);
    let scores = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::new(data.path(), scores.path(), "baseline", SplitConfig::new(1, 3));

    let report = run_benchmark(&config, |_| {}).unwrap();

    assert!(!report.is_success());
    assert_eq!(report.projects.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].project, "beta");
    assert_eq!(report.failures[0].stage, Stage::Split);

    let content = std::fs::read_to_string(scores.path().join("baseline.csv")).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_all_projects_training_set() {
    let data = data_dir(&[("alpha", ALPHA), ("beta", BETA)]);
    let store = ProjectStore::load_all(data.path()).unwrap();
    let target = store.get("alpha").unwrap();

    let split = build_augmented_training(target, &store, &SplitConfig::new(1, 3)).unwrap();

    // b3 is committed after the test window opens
    assert_eq!(commits(&split.train), vec!["c01", "c02", "c03", "b1"]);
    assert_eq!(split.train.labels, vec![true, false, false, true]);
    assert_eq!(commits(&split.test), vec!["c07", "c08", "c09"]);
    for record in &split.train.records {
        assert!(record.committer_date < split.test_start);
    }
}

#[test]
fn test_all_projects_run() {
    let data = data_dir(&[("alpha", ALPHA), ("beta", BETA)]);
    let scores = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::new(data.path(), scores.path(), "pooled", SplitConfig::new(1, 3))
        .mode(Mode::AllProjects);

    let report = run_benchmark(&config, |_| {}).unwrap();

    assert_eq!(report.projects.len(), 1);
    assert_eq!(report.projects[0].train_rows, 4);
    assert_eq!(report.projects[0].train_positives, 2);
    assert_eq!(report.failures[0].project, "beta");
    assert!(scores.path().join("pooled.csv").is_file());
}

#[test]
fn test_malformed_bug_column_aborts_run() {
    let broken = "commit,committer_date,la,ld,induces__X__fix\nx1,2020-01-01,1,1,True\n";
    let data = data_dir(&[("alpha", ALPHA), ("broken", broken)]);
    let scores = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::new(data.path(), scores.path(), "baseline", SplitConfig::new(1, 3));

    let err = run_benchmark(&config, |_| {}).unwrap_err();
    assert!(err.is_usage_error());
}

#[test]
fn test_run_report_json() {
    let data = data_dir(&[("alpha", ALPHA), ("beta", BETA)]);
    let scores = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::new(data.path(), scores.path(), "baseline", SplitConfig::new(1, 3));

    let report = run_benchmark(&config, |_| {}).unwrap();
    let path = scores.path().join("report.json");
    report.write_json(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["approach"], "baseline");
    assert_eq!(json["projects"][0]["project"], "alpha");
    assert_eq!(json["failures"][0]["project"], "beta");
}

/// Every commit falls inside the test window, leaving no training rows
#[cfg(feature = "ml")]
const GAMMA: &str = "\
commit,committer_date,author,la,ld,ns,induces__D__fixd__2020-02-15
g1,2020-01-01 00:00:00,fay,1,1,1,True
g2,2020-01-10 00:00:00,fay,2,1,1,False
g3,2020-01-20 00:00:00,gus,3,0,2,False
g4,2020-03-01 00:00:00,gus,1,1,1,False
";

#[cfg(feature = "ml")]
#[test]
fn test_empty_training_set_fails_only_its_project() {
    let data = data_dir(&[("gamma", GAMMA)]);
    let scores = tempfile::tempdir().unwrap();
    let config = BenchmarkConfig::new(data.path(), scores.path(), "rf", SplitConfig::new(1, 3))
        .classifier(ClassifierKind::RandomForest)
        .features(FeatureSelection::Columns(vec!["ns".into()]));

    let report = run_benchmark(&config, |_| {}).unwrap();

    assert!(report.projects.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].project, "gamma");
    assert_eq!(report.failures[0].stage, Stage::Fit);
}
