//! One-versus-rest confusion counts for a single target class.

/// True/false positive/negative counts for one class treated as "positive"
/// versus all others.
///
/// Derived from one pass over paired (actual, predicted) labels; each pair
/// lands in exactly one bucket, so the four counts always sum to the total
/// sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionCounts {
    /// Actual and predicted both equal the target class.
    pub tp: usize,
    /// Predicted equals the target class, actual does not.
    pub fp: usize,
    /// Neither actual nor predicted equals the target class.
    pub tn: usize,
    /// Actual equals the target class, predicted does not.
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Count confusion buckets for `target` over paired label lists.
    ///
    /// Callers guarantee equal lengths.
    pub(crate) fn from_pairs(actual: &[String], predicted: &[String], target: &str) -> Self {
        let mut counts = Self { tp: 0, fp: 0, tn: 0, fn_: 0 };
        for (a, p) in actual.iter().zip(predicted.iter()) {
            let a_is_target = a == target;
            let p_is_target = p == target;
            match (a_is_target, p_is_target) {
                (true, true) => counts.tp += 1,
                (false, true) => counts.fp += 1,
                (false, false) => counts.tn += 1,
                (true, false) => counts.fn_ += 1,
            }
        }
        counts
    }

    /// Return the total number of label pairs counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }
}
