//! Seeded shuffling and train/test splitting.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

use crate::domain::{SampleDataset, SampleId};
use crate::error::SplitError;

/// A train/test partition of a [`SampleDataset`].
///
/// Parallel vectors within each side; the two sides together hold every
/// sample of the source dataset exactly once.
#[derive(Debug)]
pub struct SplitDataset {
    /// Training sample IDs.
    pub train_ids: Vec<SampleId>,
    /// Training feature rows.
    pub train_features: Vec<Vec<f64>>,
    /// Training labels.
    pub train_labels: Vec<String>,
    /// Test sample IDs.
    pub test_ids: Vec<SampleId>,
    /// Test feature rows.
    pub test_features: Vec<Vec<f64>>,
    /// Test labels.
    pub test_labels: Vec<String>,
}

impl SplitDataset {
    /// Return the number of training samples.
    #[must_use]
    pub fn n_train(&self) -> usize {
        self.train_ids.len()
    }

    /// Return the number of test samples.
    #[must_use]
    pub fn n_test(&self) -> usize {
        self.test_ids.len()
    }
}

/// Shuffle a dataset with a seeded RNG and split it into train and test sets.
///
/// The first `round(n * train_fraction)` shuffled samples form the training
/// side. The same seed always produces the same split.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SplitError::InvalidTrainFraction`] | `train_fraction` outside (0.0, 1.0) |
/// | [`SplitError::DegenerateSplit`] | Either side would be empty |
#[instrument(skip(dataset), fields(n_samples = dataset.n_samples(), train_fraction, seed))]
pub fn train_test_split(
    dataset: &SampleDataset,
    train_fraction: f64,
    seed: u64,
) -> Result<SplitDataset, SplitError> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(SplitError::InvalidTrainFraction {
            fraction: train_fraction,
        });
    }

    let n_samples = dataset.n_samples();
    let n_train = (n_samples as f64 * train_fraction).round() as usize;
    let n_test = n_samples - n_train;
    if n_train == 0 || n_test == 0 {
        return Err(SplitError::DegenerateSplit {
            n_samples,
            fraction: train_fraction,
            n_train,
            n_test,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(&mut rng);

    let mut split = SplitDataset {
        train_ids: Vec::with_capacity(n_train),
        train_features: Vec::with_capacity(n_train),
        train_labels: Vec::with_capacity(n_train),
        test_ids: Vec::with_capacity(n_test),
        test_features: Vec::with_capacity(n_test),
        test_labels: Vec::with_capacity(n_test),
    };

    for (position, &index) in indices.iter().enumerate() {
        if position < n_train {
            split.train_ids.push(dataset.sample_ids()[index].clone());
            split.train_features.push(dataset.features()[index].clone());
            split.train_labels.push(dataset.labels()[index].clone());
        } else {
            split.test_ids.push(dataset.sample_ids()[index].clone());
            split.test_features.push(dataset.features()[index].clone());
            split.test_labels.push(dataset.labels()[index].clone());
        }
    }

    info!(n_train, n_test, "dataset split");
    Ok(split)
}
