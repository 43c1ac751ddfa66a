/// Errors from KNN classifier construction and prediction.
#[derive(Debug, thiserror::Error)]
pub enum KnnError {
    /// Returned when the training dataset has zero samples.
    #[error("training dataset has zero samples")]
    EmptyDataset,

    /// Returned when the training dataset has zero feature columns.
    #[error("training dataset has zero feature columns")]
    ZeroFeatures,

    /// Returned when feature rows and labels have different lengths.
    #[error("training data has {n_samples} feature rows but {n_labels} labels")]
    LabelCountMismatch {
        /// Number of feature rows.
        n_samples: usize,
        /// Number of labels.
        n_labels: usize,
    },

    /// Returned when a training row has a different number of features than the first row.
    #[error("sample {sample_index} has {got} features, expected {expected}")]
    FeatureCountMismatch {
        /// The expected number of features.
        expected: usize,
        /// The actual number of features in the sample.
        got: usize,
        /// The zero-based index of the offending sample.
        sample_index: usize,
    },

    /// Returned when k is zero or exceeds the number of training samples.
    #[error("k must be between 1 and the number of training samples ({n_samples}), got {k}")]
    InvalidNeighborCount {
        /// The invalid k value provided.
        k: usize,
        /// The number of training samples.
        n_samples: usize,
    },

    /// Returned when k is even. Odd k prevents voting ties between two classes.
    #[error("k must be odd to avoid voting ties, got {k}")]
    EvenNeighborCount {
        /// The invalid k value provided.
        k: usize,
    },

    /// Returned when two vectors being compared have different lengths.
    #[error("query has {got} features, expected {expected}")]
    ShapeMismatch {
        /// The expected vector length.
        expected: usize,
        /// The actual vector length.
        got: usize,
    },

    /// Returned when a neighbor's label falls outside the configured class pair.
    #[error("unknown label \"{label}\" at training sample {sample_index}")]
    UnknownLabel {
        /// The unrecognized label value.
        label: String,
        /// The zero-based index of the training sample carrying it.
        sample_index: usize,
    },

    /// Returned when a class name is empty.
    #[error("class name must not be empty")]
    EmptyClassName,

    /// Returned when the positive and negative class names are equal.
    #[error("positive and negative classes must differ, both are \"{name}\"")]
    IdenticalClasses {
        /// The duplicated class name.
        name: String,
    },
}
