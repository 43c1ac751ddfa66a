//! Error types for dataset I/O, normalization, and splitting.

use std::path::PathBuf;

/// Errors from file I/O, CSV parsing, and result serialization.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the CSV file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the CSV file contains a header but zero data rows.
    #[error("empty dataset (no data rows) in {path}")]
    EmptyDataset {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Returned when the header has fewer than three columns
    /// (sample_id, label, and at least one feature).
    #[error("header in {path} has {got} columns, need at least 3 (sample_id, label, features)")]
    TooFewColumns {
        /// Path to the CSV file.
        path: PathBuf,
        /// Number of header columns found.
        got: usize,
    },

    /// Returned when a data row has a different number of columns than the header.
    #[error("inconsistent row length in {path}: row {row_index} (sample {sample_id}) has {got} columns, expected {expected}")]
    InconsistentRowLength {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// Sample ID of the offending row.
        sample_id: String,
        /// Expected number of columns (from header).
        expected: usize,
        /// Actual number of columns in this row.
        got: usize,
    },

    /// Returned when a feature cell is NaN, Inf, or otherwise not a finite float.
    #[error("non-finite value in {path}: row {row_index}, feature column {col_index}, raw value \"{raw}\"")]
    NonFiniteValue {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// Zero-based feature column index (excluding sample_id and label columns).
        col_index: usize,
        /// The raw string value that failed to parse.
        raw: String,
    },

    /// Returned when the same sample ID appears more than once.
    #[error("duplicate sample ID \"{sample_id}\" in {path}: first at row {first_row}, again at row {second_row}")]
    DuplicateSampleId {
        /// Path to the CSV file.
        path: PathBuf,
        /// The duplicated sample ID.
        sample_id: String,
        /// Zero-based row index of the first occurrence.
        first_row: usize,
        /// Zero-based row index of the second occurrence.
        second_row: usize,
    },

    /// Returned when a row's label cell is blank.
    #[error("empty label in {path}: row {row_index} (sample {sample_id})")]
    EmptyLabel {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// Sample ID of the offending row.
        sample_id: String,
    },

    /// Returned when the experiment name contains characters outside `[a-zA-Z0-9_-]`.
    #[error("invalid experiment name \"{name}\": must match [a-zA-Z0-9_-]+")]
    InvalidExperimentName {
        /// The invalid name.
        name: String,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a result file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors from z-score normalization.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// Returned when fitting on zero feature rows.
    #[error("cannot fit normalizer on zero samples")]
    EmptyFeatures,

    /// Returned when a row's width differs from the fitted width.
    #[error("sample {sample_index} has {got} features, expected {expected}")]
    FeatureCountMismatch {
        /// The expected number of features.
        expected: usize,
        /// The actual number of features in the sample.
        got: usize,
        /// The zero-based index of the offending sample.
        sample_index: usize,
    },
}

/// Errors from train/test splitting.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Returned when the train fraction is outside the open interval (0, 1).
    #[error("train fraction must be in (0.0, 1.0), got {fraction}")]
    InvalidTrainFraction {
        /// The invalid fraction provided.
        fraction: f64,
    },

    /// Returned when the requested fraction leaves the train or test side empty.
    #[error("split of {n_samples} samples at fraction {fraction} leaves an empty side ({n_train} train / {n_test} test)")]
    DegenerateSplit {
        /// Total number of samples.
        n_samples: usize,
        /// The requested train fraction.
        fraction: f64,
        /// Resulting train size.
        n_train: usize,
        /// Resulting test size.
        n_test: usize,
    },
}
