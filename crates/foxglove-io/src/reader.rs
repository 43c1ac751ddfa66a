//! CSV dataset reader with full input validation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::IoError;
use crate::domain::{SampleDataset, SampleId};

/// Reads a labeled feature dataset from a CSV file.
///
/// Expected CSV format:
/// - Header row required: `sample_id,label,<feature names...>`
/// - One row per sample, all rows with the same number of columns
/// - Feature cells must parse as finite floats
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::TooFewColumns`] | Header has fewer than 3 columns |
/// | [`IoError::EmptyDataset`] | Zero data rows after header |
/// | [`IoError::InconsistentRowLength`] | Row has different column count than header |
/// | [`IoError::NonFiniteValue`] | Feature cell is NaN, Inf, or unparseable |
/// | [`IoError::DuplicateSampleId`] | Same sample_id appears twice |
/// | [`IoError::EmptyLabel`] | Blank label cell |
pub struct DatasetReader {
    path: PathBuf,
}

impl DatasetReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the CSV file, returning a [`SampleDataset`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<SampleDataset, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) lets rows with varying column counts through so that
        // our own InconsistentRowLength check fires instead of a low-level
        // CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let header = rdr.headers().map_err(|e| IoError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        })?;
        let expected_cols = header.len();
        if expected_cols < 3 {
            return Err(IoError::TooFewColumns {
                path: self.path.clone(),
                got: expected_cols,
            });
        }
        let feature_names: Vec<String> = header.iter().skip(2).map(str::to_string).collect();
        debug!(expected_cols, "read CSV header");

        let mut sample_ids = Vec::new();
        let mut labels = Vec::new();
        let mut features = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;

            if record.len() != expected_cols {
                let sample_id = record.get(0).unwrap_or("").to_string();
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    sample_id,
                    expected: expected_cols,
                    got: record.len(),
                });
            }

            let sample_id_str = record.get(0).unwrap_or("").to_string();

            if let Some(&first_row) = seen.get(&sample_id_str) {
                return Err(IoError::DuplicateSampleId {
                    path: self.path.clone(),
                    sample_id: sample_id_str,
                    first_row,
                    second_row: row_index,
                });
            }
            seen.insert(sample_id_str.clone(), row_index);

            let label = record.get(1).unwrap_or("").to_string();
            if label.is_empty() {
                return Err(IoError::EmptyLabel {
                    path: self.path.clone(),
                    row_index,
                    sample_id: sample_id_str,
                });
            }

            // Parse feature values (columns 2..n)
            let mut row = Vec::with_capacity(expected_cols - 2);
            for col_index in 2..record.len() {
                let raw = record.get(col_index).unwrap_or("");
                let value: f64 = raw.parse().map_err(|_| IoError::NonFiniteValue {
                    path: self.path.clone(),
                    row_index,
                    col_index: col_index - 2,
                    raw: raw.to_string(),
                })?;
                if !value.is_finite() {
                    return Err(IoError::NonFiniteValue {
                        path: self.path.clone(),
                        row_index,
                        col_index: col_index - 2,
                        raw: raw.to_string(),
                    });
                }
                row.push(value);
            }

            sample_ids.push(SampleId::new(sample_id_str));
            labels.push(label);
            features.push(row);
        }

        if sample_ids.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        info!(
            n_samples = sample_ids.len(),
            n_features = feature_names.len(),
            "dataset loaded"
        );

        Ok(SampleDataset::new(sample_ids, labels, feature_names, features))
    }
}
