//! Defectbench CLI - temporal benchmark for bug-inducing commit prediction
//!
//! Scores an approach on every project table of a data directory and appends
//! the scores to `<scores_dir>/<approach>.csv`.

use std::path::PathBuf;

use clap::Parser;
use defectbench::features::{FeatureSelection, FeatureSet};
use defectbench::harness::{run_benchmark, BenchmarkConfig, Mode};
use defectbench::ml::{ClassifierKind, SplitConfig};
use defectbench::Result;
use tracing_subscriber::EnvFilter;

/// Defectbench - score defect predictors on temporally split commit tables
#[derive(Parser, Debug)]
#[command(name = "defectbench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory of project tables (`<project>.csv.gz`)
    data_dir: PathBuf,

    /// Directory of approach score tables
    scores_dir: PathBuf,

    /// Approach name, also the score table file name
    approach: String,

    /// Months dropped from the end of each project's history
    drop_months_end: u32,

    /// Number of most recent commits forming the test set
    num_test_commits: usize,

    /// Training data (within-project, all-projects)
    #[arg(long, default_value = "within-project")]
    mode: String,

    /// Classifier (always-inducing, random-forest, logistic-regression)
    #[arg(long, default_value = "always-inducing")]
    classifier: String,

    /// Named feature set, e.g. ALL_FEATURES or static-class
    #[arg(long, default_value = "ALL_FEATURES", conflicts_with = "feature_file")]
    features: String,

    /// CSV file whose first row lists the selected feature columns
    #[arg(long)]
    feature_file: Option<PathBuf>,

    /// Train on a seeded random fraction of the training rows
    #[arg(long)]
    train_fraction: Option<f64>,

    /// Seed for subsampling and classifiers
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing subscriber, `RUST_LOG` overrides the default level
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<BenchmarkConfig> {
    let features = match &cli.feature_file {
        Some(path) => FeatureSelection::from_file(path)?,
        None => FeatureSelection::Set(cli.features.parse::<FeatureSet>()?),
    };
    let split = SplitConfig::new(cli.drop_months_end, cli.num_test_commits);

    Ok(BenchmarkConfig::new(
        cli.data_dir.clone(),
        cli.scores_dir.clone(),
        cli.approach.clone(),
        split,
    )
    .mode(cli.mode.parse::<Mode>()?)
    .classifier(cli.classifier.parse::<ClassifierKind>()?)
    .features(features)
    .train_fraction(cli.train_fraction)
    .seed(cli.seed))
}

fn run(cli: &Cli) -> Result<bool> {
    let config = build_config(cli)?;
    let report = run_benchmark(&config, |summary| println!("{}", summary.to_ascii()))?;

    for failure in &report.failures {
        eprintln!(
            "Failed: {} ({}): {}",
            failure.project, failure.stage, failure.message
        );
    }
    if let Some(path) = &cli.report {
        report.write_json(path)?;
        tracing::info!(path = %path.display(), "wrote run report");
    }
    Ok(report.is_success())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
