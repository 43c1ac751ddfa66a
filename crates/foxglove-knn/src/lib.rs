//! k-nearest-neighbors classification core.
//!
//! Provides Euclidean distance, a binary KNN classifier over a borrowed
//! training set with a deterministic index-ascending tie-break, and
//! parallel batch prediction via rayon.

mod classes;
mod classifier;
mod distance;
mod error;
mod neighbors;

pub use classes::ClassPair;
pub use classifier::KnnClassifier;
pub use distance::euclidean;
pub use error::KnnError;
