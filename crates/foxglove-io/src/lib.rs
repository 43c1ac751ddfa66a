//! Dataset loading, preprocessing, and result writing.
//!
//! CSV reading with full input validation, z-score normalization with
//! fit/transform separation, seeded train/test splitting, and JSON result
//! artifacts.

mod domain;
mod error;
mod normalize;
mod reader;
mod split;
mod writer;

pub use domain::{ExperimentName, SampleDataset, SampleId};
pub use error::{IoError, PrepError, SplitError};
pub use normalize::ZScoreNormalizer;
pub use reader::DatasetReader;
pub use split::{SplitDataset, train_test_split};
pub use writer::{ResultWriter, SweepEntry};
