//! The k-nearest-neighbors classifier.

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, instrument};

use crate::classes::ClassPair;
use crate::error::KnnError;
use crate::neighbors::select_nearest;

/// A k-nearest-neighbors classifier over a borrowed training set.
///
/// Holds references to the caller's feature rows and labels; the training
/// data is never copied. Mutating the referenced data between `predict`
/// calls is the caller's responsibility to avoid.
///
/// Prediction finds the k training samples closest to the query under
/// Euclidean distance (ties broken by ascending training index) and takes a
/// signed-tally majority vote between the two configured classes. The odd-k
/// invariant enforced at construction makes a tied vote impossible.
#[derive(Debug)]
pub struct KnnClassifier<'a> {
    features: &'a [Vec<f64>],
    labels: &'a [String],
    classes: ClassPair,
    k: usize,
    n_features: usize,
}

impl<'a> KnnClassifier<'a> {
    /// Create a classifier over the given training data.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`KnnError::EmptyDataset`] | Zero training samples |
    /// | [`KnnError::ZeroFeatures`] | Rows have zero feature columns |
    /// | [`KnnError::LabelCountMismatch`] | `features` and `labels` lengths differ |
    /// | [`KnnError::FeatureCountMismatch`] | Rows have inconsistent lengths |
    /// | [`KnnError::InvalidNeighborCount`] | `k` is 0 or exceeds the sample count |
    /// | [`KnnError::EvenNeighborCount`] | `k` is even |
    pub fn new(
        features: &'a [Vec<f64>],
        labels: &'a [String],
        classes: ClassPair,
        k: usize,
    ) -> Result<Self, KnnError> {
        if features.is_empty() {
            return Err(KnnError::EmptyDataset);
        }
        if features.len() != labels.len() {
            return Err(KnnError::LabelCountMismatch {
                n_samples: features.len(),
                n_labels: labels.len(),
            });
        }
        let n_features = features[0].len();
        if n_features == 0 {
            return Err(KnnError::ZeroFeatures);
        }
        for (sample_index, row) in features.iter().enumerate() {
            if row.len() != n_features {
                return Err(KnnError::FeatureCountMismatch {
                    expected: n_features,
                    got: row.len(),
                    sample_index,
                });
            }
        }
        if k < 1 || k > features.len() {
            return Err(KnnError::InvalidNeighborCount {
                k,
                n_samples: features.len(),
            });
        }
        if k % 2 == 0 {
            return Err(KnnError::EvenNeighborCount { k });
        }

        Ok(Self {
            features,
            labels,
            classes,
            k,
            n_features,
        })
    }

    /// Predict the class of a single query vector.
    ///
    /// Returns a reference to one of the two configured class names.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`KnnError::ShapeMismatch`] | Query length differs from the training width |
    /// | [`KnnError::UnknownLabel`] | A neighbor's label is outside the class pair |
    pub fn predict(&self, query: &[f64]) -> Result<&str, KnnError> {
        if query.len() != self.n_features {
            return Err(KnnError::ShapeMismatch {
                expected: self.n_features,
                got: query.len(),
            });
        }

        let nearest = select_nearest(query, self.features, self.k)?;

        // Signed tally: positive class +1, negative class -1. With odd k
        // the tally cannot be zero.
        let mut tally: i64 = 0;
        for neighbor in &nearest {
            let label = self.labels[neighbor.index].as_str();
            if label == self.classes.positive() {
                tally += 1;
            } else if label == self.classes.negative() {
                tally -= 1;
            } else {
                return Err(KnnError::UnknownLabel {
                    label: label.to_string(),
                    sample_index: neighbor.index,
                });
            }
        }

        debug_assert_ne!(tally, 0, "odd k cannot produce a tied vote");
        Ok(if tally > 0 {
            self.classes.positive()
        } else {
            self.classes.negative()
        })
    }

    /// Predict classes for a batch of query vectors in parallel.
    ///
    /// Each prediction is independent and side-effect-free, so the batch
    /// fans out across the rayon thread pool.
    ///
    /// # Errors
    ///
    /// Returns the first error from any individual prediction.
    #[instrument(skip_all, fields(n_queries = queries.len(), k = self.k))]
    pub fn predict_batch(&self, queries: &[Vec<f64>]) -> Result<Vec<String>, KnnError> {
        let predictions = queries
            .into_par_iter()
            .map(|query| self.predict(query).map(str::to_string))
            .collect::<Result<Vec<String>, KnnError>>()?;
        debug!(n_predicted = predictions.len(), "batch prediction complete");
        Ok(predictions)
    }

    /// Return the neighbor count k.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Return the number of training samples.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.features.len()
    }

    /// Return the training feature width.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Return the configured class pair.
    #[must_use]
    pub fn classes(&self) -> &ClassPair {
        &self.classes
    }
}
