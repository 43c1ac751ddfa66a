//! JSON result writer for evaluation and sweep outputs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use foxglove_metrics::Evaluation;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::IoError;
use crate::domain::ExperimentName;

/// One entry of a k sweep: the candidate k and its test accuracy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepEntry {
    /// The neighbor count that was evaluated.
    pub k: usize,
    /// Test-set accuracy for that k.
    pub accuracy: f64,
}

/// Writes evaluation and sweep results to JSON files.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{experiment}_evaluation.json` and
/// `{experiment}_sweep.json`.
pub struct ResultWriter {
    output_dir: PathBuf,
    experiment: ExperimentName,
}

#[derive(Serialize)]
struct AvgEntry {
    precision: f64,
    recall: f64,
    f1: f64,
}

#[derive(Serialize)]
struct ClassEntry {
    class: String,
    precision: f64,
    recall: f64,
    f1: f64,
    support: usize,
}

#[derive(Serialize)]
struct EvaluationArtifact<'a> {
    experiment: &'a str,
    k: usize,
    n_train: usize,
    n_test: usize,
    accuracy: f64,
    classes: Vec<ClassEntry>,
    macro_avg: AvgEntry,
    weighted_avg: AvgEntry,
    support: BTreeMap<String, usize>,
}

#[derive(Serialize)]
struct SweepArtifact<'a> {
    experiment: &'a str,
    n_train: usize,
    n_test: usize,
    best_k: Option<usize>,
    results: &'a [SweepEntry],
}

impl ResultWriter {
    /// Create a new writer targeting the given directory and experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), experiment = %experiment))]
    pub fn new(output_dir: &Path, experiment: ExperimentName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            experiment,
        })
    }

    /// Write an evaluation result to `{experiment}_evaluation.json`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all)]
    pub fn write_evaluation(
        &self,
        k: usize,
        n_train: usize,
        n_test: usize,
        eval: &Evaluation<'_>,
    ) -> Result<(), IoError> {
        let path = self
            .output_dir
            .join(format!("{}_evaluation.json", self.experiment.as_str()));

        let classes: Vec<ClassEntry> = eval
            .class_metrics()
            .into_iter()
            .map(|m| ClassEntry {
                class: m.class,
                precision: m.precision,
                recall: m.recall,
                f1: m.f1,
                support: m.support,
            })
            .collect();

        let artifact = EvaluationArtifact {
            experiment: self.experiment.as_str(),
            k,
            n_train,
            n_test,
            accuracy: eval.accuracy(),
            classes,
            macro_avg: AvgEntry {
                precision: eval.macro_precision(),
                recall: eval.macro_recall(),
                f1: eval.macro_f1(),
            },
            weighted_avg: AvgEntry {
                precision: eval.weighted_precision(),
                recall: eval.weighted_recall(),
                f1: eval.weighted_f1(),
            },
            support: eval.support_map(),
        };

        self.write_json(&path, &artifact)?;
        info!(path = %path.display(), "evaluation result written");
        Ok(())
    }

    /// Write a sweep result to `{experiment}_sweep.json`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all, fields(n_results = results.len()))]
    pub fn write_sweep(
        &self,
        n_train: usize,
        n_test: usize,
        best_k: Option<usize>,
        results: &[SweepEntry],
    ) -> Result<(), IoError> {
        let path = self
            .output_dir
            .join(format!("{}_sweep.json", self.experiment.as_str()));

        let artifact = SweepArtifact {
            experiment: self.experiment.as_str(),
            n_train,
            n_test,
            best_k,
            results,
        };

        self.write_json(&path, &artifact)?;
        info!(path = %path.display(), "sweep result written");
        Ok(())
    }

    fn write_json<T: Serialize>(&self, path: &Path, artifact: &T) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(artifact).expect("serialization cannot fail");
        fs::write(path, &json).map_err(|e| IoError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
