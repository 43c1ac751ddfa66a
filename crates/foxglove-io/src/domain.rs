//! Domain types for foxglove-io.

use crate::IoError;

/// A sample identifier from the first column of the input CSV.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleId(String);

impl SampleId {
    /// Create a new sample ID from a non-empty string.
    pub(crate) fn new(id: String) -> Self {
        debug_assert!(!id.is_empty(), "sample ID must not be empty");
        Self(id)
    }

    /// Return the sample ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SampleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated experiment name for output file naming.
///
/// Must match `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentName(String);

impl ExperimentName {
    /// Parse and validate an experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidExperimentName`] if the name is empty or
    /// contains characters outside `[a-zA-Z0-9_-]`.
    pub fn new(name: String) -> Result<Self, IoError> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(IoError::InvalidExperimentName { name });
        }
        Ok(Self(name))
    }

    /// Return the experiment name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExperimentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labeled dataset of feature vectors.
///
/// Produced by [`DatasetReader`](crate::DatasetReader). Sample IDs, labels,
/// and feature rows are stored in parallel vectors — `sample_ids[i]`
/// corresponds to `labels[i]` and `features[i]`, and every row has the same
/// width. Both invariants are established at read time.
#[derive(Debug)]
pub struct SampleDataset {
    /// Sample identifiers in insertion order.
    sample_ids: Vec<SampleId>,
    /// Class labels, parallel to `sample_ids`.
    labels: Vec<String>,
    /// Feature column names from the CSV header.
    feature_names: Vec<String>,
    /// Feature values: `features[sample_index][feature_index]`.
    features: Vec<Vec<f64>>,
}

impl SampleDataset {
    /// Create a new sample dataset.
    pub(crate) fn new(
        sample_ids: Vec<SampleId>,
        labels: Vec<String>,
        feature_names: Vec<String>,
        features: Vec<Vec<f64>>,
    ) -> Self {
        Self { sample_ids, labels, feature_names, features }
    }

    /// Return the sample IDs.
    #[must_use]
    pub fn sample_ids(&self) -> &[SampleId] {
        &self.sample_ids
    }

    /// Return the class labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Return the feature column names.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Return the feature matrix (row-major).
    #[must_use]
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    /// Return the number of samples.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.sample_ids.len()
    }

    /// Return the number of feature columns.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_id_as_str_returns_inner() {
        let id = SampleId::new("842302".to_string());
        assert_eq!(id.as_str(), "842302");
    }

    #[test]
    fn experiment_name_valid() {
        let name = ExperimentName::new("wdbc-run_01".to_string());
        assert!(name.is_ok());
        assert_eq!(name.unwrap().as_str(), "wdbc-run_01");
    }

    #[test]
    fn experiment_name_rejects_empty() {
        let name = ExperimentName::new(String::new());
        assert!(matches!(name, Err(IoError::InvalidExperimentName { .. })));
    }

    #[test]
    fn experiment_name_rejects_special_chars() {
        let name = ExperimentName::new("run 01!".to_string());
        assert!(matches!(name, Err(IoError::InvalidExperimentName { .. })));
    }

    #[test]
    fn dataset_accessors() {
        let ds = SampleDataset::new(
            vec![SampleId::new("a".into()), SampleId::new("b".into())],
            vec!["B".to_string(), "M".to_string()],
            vec!["f0".to_string(), "f1".to_string()],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        );
        assert_eq!(ds.n_samples(), 2);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.labels(), &["B".to_string(), "M".to_string()]);
    }
}
