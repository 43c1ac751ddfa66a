//! Multi-class classification performance metrics.
//!
//! Per-class confusion counts, precision/recall/F1 with a
//! zero-on-zero-denominator convention, overall accuracy, macro and
//! support-weighted aggregates, and a printable classification report.

mod confusion;
mod engine;
mod error;
mod report;

pub use confusion::ConfusionCounts;
pub use engine::{ClassMetrics, Evaluation};
pub use error::MetricsError;
pub use report::ClassificationReport;
