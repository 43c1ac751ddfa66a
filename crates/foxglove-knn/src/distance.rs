//! Euclidean distance over equal-length feature vectors.

use crate::error::KnnError;

/// Compute the Euclidean distance between two feature vectors.
///
/// Pure and symmetric; `euclidean(a, a)` is 0.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`KnnError::ShapeMismatch`] | `a` and `b` have different lengths |
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
    if a.len() != b.len() {
        return Err(KnnError::ShapeMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y).powi(2))
        .sum();
    Ok(sum.sqrt())
}
