use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use foxglove_io::{
    DatasetReader, ExperimentName, ResultWriter, SplitDataset, SweepEntry, ZScoreNormalizer,
    train_test_split,
};
use foxglove_knn::{ClassPair, KnnClassifier, KnnError};
use foxglove_metrics::{ClassificationReport, Evaluation};

#[derive(Parser)]
#[command(name = "foxglove")]
#[command(about = "KNN diagnosis classification: split, normalize, classify, evaluate")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// RNG seed for the train/test shuffle
    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Number of threads for parallel prediction (defaults to all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

/// Shared pipeline parameters for loading and preparing the dataset.
#[derive(Args, Debug, Clone)]
struct PipelineArgs {
    /// Path to the input CSV file (sample_id,label,features...)
    #[arg(long)]
    data: PathBuf,

    /// Fraction of samples used for training
    #[arg(long, default_value_t = 0.8)]
    train_fraction: f64,

    /// Class name counted as the positive vote
    #[arg(long, default_value = "B")]
    positive: String,

    /// Class name counted as the negative vote
    #[arg(long, default_value = "M")]
    negative: String,

    /// Experiment name for output files (must match [a-zA-Z0-9_-]+)
    #[arg(long)]
    experiment: String,

    /// Output directory for result files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Classify the test split with a single k and report metrics
    Classify {
        /// Number of nearest neighbors (must be odd)
        #[arg(long)]
        k: usize,

        /// Print the classification report table before the JSON summary
        #[arg(long, default_value_t = false)]
        report: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Evaluate every valid k in a range and report the best one
    Sweep {
        /// Minimum k to try
        #[arg(long)]
        min_k: usize,

        /// Maximum k to try
        #[arg(long)]
        max_k: usize,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct ClassifyOutput {
    experiment: String,
    n_samples: usize,
    n_features: usize,
    n_train: usize,
    n_test: usize,
    k: usize,
    accuracy: f64,
    macro_f1: f64,
    weighted_f1: f64,
}

#[derive(Serialize)]
struct SweepOutput {
    experiment: String,
    n_samples: usize,
    n_train: usize,
    n_test: usize,
    best_k: Option<usize>,
    best_accuracy: Option<f64>,
    n_evaluated: usize,
    n_skipped: usize,
}

/// The dataset after reading, splitting, and normalizing.
struct PreparedData {
    split: SplitDataset,
    train_x: Vec<Vec<f64>>,
    test_x: Vec<Vec<f64>>,
    n_samples: usize,
    n_features: usize,
}

fn prepare(pipeline: &PipelineArgs, seed: u64) -> Result<PreparedData> {
    let dataset = DatasetReader::new(&pipeline.data)
        .read()
        .context("failed to read input CSV")?;
    let n_samples = dataset.n_samples();
    let n_features = dataset.n_features();

    let split = train_test_split(&dataset, pipeline.train_fraction, seed)
        .context("train/test split failed")?;

    // Fit normalization statistics on the training split only.
    let (normalizer, train_x) = ZScoreNormalizer::fit_transform(&split.train_features)
        .context("normalizer fit failed")?;
    let test_x = normalizer
        .transform(&split.test_features)
        .context("test-set normalization failed")?;
    info!(n_train = split.n_train(), n_test = split.n_test(), "data prepared");

    Ok(PreparedData {
        split,
        train_x,
        test_x,
        n_samples,
        n_features,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Configure Rayon thread pool
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    match cli.command {
        Command::Classify { k, report, pipeline } => {
            let experiment_name = ExperimentName::new(pipeline.experiment.clone())?;
            let classes = ClassPair::new(pipeline.positive.clone(), pipeline.negative.clone())?;

            let prepared = prepare(&pipeline, cli.seed)?;

            let knn = KnnClassifier::new(
                &prepared.train_x,
                &prepared.split.train_labels,
                classes,
                k,
            )
            .context("classifier construction failed")?;

            let predicted = knn
                .predict_batch(&prepared.test_x)
                .context("prediction failed")?;

            let eval = Evaluation::new(&prepared.split.test_labels, &predicted)
                .context("evaluation failed")?;
            info!(accuracy = eval.accuracy(), k, "evaluation complete");

            if report {
                print!("{}", ClassificationReport::from_evaluation(&eval));
            }

            let writer = ResultWriter::new(&pipeline.output_dir, experiment_name)?;
            writer.write_evaluation(k, prepared.split.n_train(), prepared.split.n_test(), &eval)?;

            let output = ClassifyOutput {
                experiment: pipeline.experiment,
                n_samples: prepared.n_samples,
                n_features: prepared.n_features,
                n_train: prepared.split.n_train(),
                n_test: prepared.split.n_test(),
                k,
                accuracy: eval.accuracy(),
                macro_f1: eval.macro_f1(),
                weighted_f1: eval.weighted_f1(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Sweep { min_k, max_k, pipeline } => {
            anyhow::ensure!(min_k <= max_k, "min_k ({min_k}) must not exceed max_k ({max_k})");

            let experiment_name = ExperimentName::new(pipeline.experiment.clone())?;
            let classes = ClassPair::new(pipeline.positive.clone(), pipeline.negative.clone())?;

            let prepared = prepare(&pipeline, cli.seed)?;

            // Brute force over candidate k values. Invalid ones (even, or
            // outside the training size) fail construction and are skipped;
            // the sweep continues with the rest.
            let mut results: Vec<SweepEntry> = Vec::new();
            let mut n_skipped = 0usize;
            for k in min_k..=max_k {
                let knn = match KnnClassifier::new(
                    &prepared.train_x,
                    &prepared.split.train_labels,
                    classes.clone(),
                    k,
                ) {
                    Ok(knn) => knn,
                    Err(
                        err @ (KnnError::EvenNeighborCount { .. }
                        | KnnError::InvalidNeighborCount { .. }),
                    ) => {
                        warn!(k, %err, "skipping invalid k");
                        n_skipped += 1;
                        continue;
                    }
                    Err(err) => return Err(err).context("classifier construction failed"),
                };

                let predicted = knn
                    .predict_batch(&prepared.test_x)
                    .context("prediction failed")?;
                let eval = Evaluation::new(&prepared.split.test_labels, &predicted)
                    .context("evaluation failed")?;
                let accuracy = eval.accuracy();
                info!(k, accuracy, "sweep step complete");
                results.push(SweepEntry { k, accuracy });
            }

            // Best k by accuracy; the strict comparison over ascending k
            // entries sends ties to the smaller k.
            let best = results.iter().fold(None::<SweepEntry>, |best, &entry| {
                match best {
                    Some(b) if entry.accuracy > b.accuracy => Some(entry),
                    None => Some(entry),
                    other => other,
                }
            });
            if let Some(best) = best {
                info!(best_k = best.k, best_accuracy = best.accuracy, "sweep complete");
            } else {
                warn!("sweep evaluated no valid k values");
            }

            let writer = ResultWriter::new(&pipeline.output_dir, experiment_name)?;
            writer.write_sweep(
                prepared.split.n_train(),
                prepared.split.n_test(),
                best.map(|b| b.k),
                &results,
            )?;

            let output = SweepOutput {
                experiment: pipeline.experiment,
                n_samples: prepared.n_samples,
                n_train: prepared.split.n_train(),
                n_test: prepared.split.n_test(),
                best_k: best.map(|b| b.k),
                best_accuracy: best.map(|b| b.accuracy),
                n_evaluated: results.len(),
                n_skipped,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
