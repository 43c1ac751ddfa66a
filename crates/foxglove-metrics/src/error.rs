/// Errors from metrics engine construction.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Returned when the actual and predicted label lists differ in length.
    #[error("actual and predicted labels must have the same length, got {actual} and {predicted}")]
    LengthMismatch {
        /// Number of actual labels.
        actual: usize,
        /// Number of predicted labels.
        predicted: usize,
    },

    /// Returned when both label lists are empty.
    #[error("label lists have zero entries")]
    EmptyLabels,
}
