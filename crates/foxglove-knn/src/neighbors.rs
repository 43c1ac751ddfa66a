//! Bounded top-k neighbor selection with a deterministic tie-break.

use crate::distance::euclidean;
use crate::error::KnnError;

/// A training sample selected as one of the k nearest neighbors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Neighbor {
    /// Zero-based index into the training set.
    pub index: usize,
    /// Euclidean distance from the query to this sample.
    pub distance: f64,
}

/// Select the k training samples closest to `query`.
///
/// Single O(n) distance pass over the training set with a capacity-k sorted
/// buffer, O(n * k) overall. Equal distances break ties by ascending training
/// index: the buffer is ordered by (distance, index) and a candidate that
/// ties the current worst kept distance is rejected, so the earlier index
/// always wins. The returned neighbors are sorted by (distance, index).
///
/// Callers guarantee `k <= features.len()`.
///
/// # Errors
///
/// Returns [`KnnError::ShapeMismatch`] if any training row length differs
/// from the query length.
pub(crate) fn select_nearest(
    query: &[f64],
    features: &[Vec<f64>],
    k: usize,
) -> Result<Vec<Neighbor>, KnnError> {
    let mut nearest: Vec<Neighbor> = Vec::with_capacity(k + 1);

    for (index, row) in features.iter().enumerate() {
        let distance = euclidean(query, row)?;

        if nearest.len() == k {
            // Strict comparison: a tie with the current worst keeps the
            // earlier index already in the buffer.
            let worst = nearest[k - 1].distance;
            if distance >= worst {
                continue;
            }
        }

        // Insert after any equal distance so earlier indices sort first.
        let pos = nearest.partition_point(|n| n.distance <= distance);
        nearest.insert(pos, Neighbor { index, distance });
        nearest.truncate(k);
    }

    Ok(nearest)
}
