//! Per-column z-score normalization with fit/transform separation.

use tracing::{debug, instrument};

use crate::error::PrepError;

/// A fitted z-score normalizer: per-column mean and standard deviation.
///
/// Fitting and transforming are separate so the statistics come from the
/// training split only and test data is transformed with the same
/// parameters. A fitted normalizer exists by construction; there is no
/// unfitted state to check at transform time.
///
/// Uses population standard deviation (divides by n). A column with zero
/// standard deviation gets 1.0 substituted, so constant columns normalize
/// to all zeros instead of dividing by zero.
#[derive(Debug, Clone)]
pub struct ZScoreNormalizer {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl ZScoreNormalizer {
    /// Fit a normalizer to the given feature rows.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`PrepError::EmptyFeatures`] | Zero rows |
    /// | [`PrepError::FeatureCountMismatch`] | Rows have inconsistent widths |
    #[instrument(skip_all, fields(n_samples = features.len()))]
    pub fn fit(features: &[Vec<f64>]) -> Result<Self, PrepError> {
        if features.is_empty() {
            return Err(PrepError::EmptyFeatures);
        }
        let n_features = features[0].len();
        for (sample_index, row) in features.iter().enumerate() {
            if row.len() != n_features {
                return Err(PrepError::FeatureCountMismatch {
                    expected: n_features,
                    got: row.len(),
                    sample_index,
                });
            }
        }

        let n = features.len() as f64;
        let mut means = vec![0.0; n_features];
        for row in features {
            for (mean, &value) in means.iter_mut().zip(row.iter()) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut stds = vec![0.0; n_features];
        for row in features {
            for ((std, &mean), &value) in stds.iter_mut().zip(means.iter()).zip(row.iter()) {
                *std += (value - mean).powi(2);
            }
        }
        for std in &mut stds {
            *std = (*std / n).sqrt();
            if *std == 0.0 {
                *std = 1.0;
            }
        }

        debug!(n_features, "normalizer fitted");
        Ok(Self { means, stds })
    }

    /// Apply `(x - mean) / std` to every cell of the given rows.
    ///
    /// # Errors
    ///
    /// Returns [`PrepError::FeatureCountMismatch`] if any row's width
    /// differs from the fitted width.
    pub fn transform(&self, features: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, PrepError> {
        features
            .iter()
            .enumerate()
            .map(|(sample_index, row)| {
                if row.len() != self.means.len() {
                    return Err(PrepError::FeatureCountMismatch {
                        expected: self.means.len(),
                        got: row.len(),
                        sample_index,
                    });
                }
                Ok(row
                    .iter()
                    .zip(self.means.iter().zip(self.stds.iter()))
                    .map(|(&value, (&mean, &std))| (value - mean) / std)
                    .collect())
            })
            .collect()
    }

    /// Fit to the given rows and transform them in one step.
    ///
    /// # Errors
    ///
    /// Same as [`ZScoreNormalizer::fit`].
    pub fn fit_transform(features: &[Vec<f64>]) -> Result<(Self, Vec<Vec<f64>>), PrepError> {
        let normalizer = Self::fit(features)?;
        let transformed = normalizer.transform(features)?;
        Ok((normalizer, transformed))
    }

    /// Return the fitted per-column means.
    #[must_use]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Return the fitted per-column standard deviations.
    #[must_use]
    pub fn stds(&self) -> &[f64] {
        &self.stds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(rows: &[Vec<f64>], index: usize) -> Vec<f64> {
        rows.iter().map(|r| r[index]).collect()
    }

    #[test]
    fn transformed_columns_zero_mean_unit_variance() {
        let features = vec![
            vec![1.0, 100.0],
            vec![2.0, 200.0],
            vec![3.0, 300.0],
            vec![4.0, 400.0],
        ];
        let (_, transformed) = ZScoreNormalizer::fit_transform(&features).unwrap();

        for col_index in 0..2 {
            let col = column(&transformed, col_index);
            let n = col.len() as f64;
            let mean = col.iter().sum::<f64>() / n;
            let variance = col.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
            assert!(mean.abs() < 1e-10, "column {col_index} mean was {mean}");
            assert!(
                (variance - 1.0).abs() < 1e-10,
                "column {col_index} variance was {variance}"
            );
        }
    }

    #[test]
    fn constant_column_maps_to_zeros() {
        let features = vec![vec![5.0, 1.0], vec![5.0, 2.0], vec![5.0, 3.0]];
        let (normalizer, transformed) = ZScoreNormalizer::fit_transform(&features).unwrap();
        assert_eq!(normalizer.stds()[0], 1.0);
        for row in &transformed {
            assert_eq!(row[0], 0.0);
        }
    }

    #[test]
    fn test_data_uses_train_statistics() {
        let train = vec![vec![0.0], vec![10.0]];
        let normalizer = ZScoreNormalizer::fit(&train).unwrap();
        // mean 5, population std 5 -> 20 maps to (20 - 5) / 5 = 3.
        let transformed = normalizer.transform(&[vec![20.0]]).unwrap();
        assert!((transformed[0][0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn fit_empty_rejected() {
        let result = ZScoreNormalizer::fit(&[]);
        assert!(matches!(result, Err(PrepError::EmptyFeatures)));
    }

    #[test]
    fn fit_jagged_rejected() {
        let features = vec![vec![1.0, 2.0], vec![1.0]];
        let result = ZScoreNormalizer::fit(&features);
        assert!(matches!(
            result,
            Err(PrepError::FeatureCountMismatch { expected: 2, got: 1, sample_index: 1 })
        ));
    }

    #[test]
    fn transform_width_mismatch_rejected() {
        let normalizer = ZScoreNormalizer::fit(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let result = normalizer.transform(&[vec![1.0]]);
        assert!(matches!(
            result,
            Err(PrepError::FeatureCountMismatch { expected: 2, got: 1, sample_index: 0 })
        ));
    }
}
