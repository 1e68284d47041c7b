use std::fs::File;
use std::io::BufWriter;

use adaptive_knn::dataset::{accuracy, load_patterns, result_path, write_results};
use adaptive_knn::{Classifier, Cli, PatternKind};
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("adaptive_knn=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.knn_config().context("invalid arguments")?;

    let mut training = load_patterns(&cli.training, PatternKind::Training)
        .with_context(|| format!("loading training set {}", cli.training.display()))?;
    let mut testing = load_patterns(&cli.testing, PatternKind::Testing)
        .with_context(|| format!("loading testing set {}", cli.testing.display()))?;

    let mut classifier = Classifier::new(&mut training, &mut testing, config)?;
    let results = classifier.classify().context("classification failed")?;

    let output = result_path(&cli.testing);
    let file = File::create(&output)
        .with_context(|| format!("creating result file {}", output.display()))?;
    write_results(BufWriter::new(file), results)
        .with_context(|| format!("writing results to {}", output.display()))?;

    match accuracy(results) {
        Some(acc) => info!(accuracy = acc * 100.0, "accuracy (%)"),
        None => info!("testing set is empty; accuracy not computed"),
    }
    info!(output = %output.display(), "classification finished");
    Ok(())
}
