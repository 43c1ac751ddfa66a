//! Evaluation engine: per-class and aggregate metrics over label pairs.

use std::collections::BTreeMap;

use crate::confusion::ConfusionCounts;
use crate::error::MetricsError;

/// Per-class precision, recall, F1 score, and support.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetrics {
    /// The class label.
    pub class: String,
    /// Precision: TP / (TP + FP). 0.0 if no predictions for this class.
    pub precision: f64,
    /// Recall: TP / (TP + FN). 0.0 if no true samples for this class.
    pub recall: f64,
    /// F1: 2 * precision * recall / (precision + recall). 0.0 if both are zero.
    pub f1: f64,
    /// Number of true samples in this class.
    pub support: usize,
}

/// Evaluates predicted labels against ground truth.
///
/// Borrows two equal-length label slices, immutable for the engine's
/// lifetime. The class set is derived from the *actual* labels only, held
/// sorted for stable reporting; a predicted label never seen in the actual
/// list contributes to no per-class row and is excluded from macro and
/// weighted aggregation. That asymmetry matches the long-standing behavior
/// of this pipeline and is kept deliberately.
///
/// All metric accessors are pure functions of the two slices: confusion
/// counts are recomputed per call, never cached, and calls are valid in any
/// order and any number of times.
#[derive(Debug)]
pub struct Evaluation<'a> {
    actual: &'a [String],
    predicted: &'a [String],
    classes: Vec<String>,
}

impl<'a> Evaluation<'a> {
    /// Create an evaluation over paired actual/predicted labels.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricsError::LengthMismatch`] | The two lists differ in length |
    /// | [`MetricsError::EmptyLabels`] | Both lists are empty |
    pub fn new(actual: &'a [String], predicted: &'a [String]) -> Result<Self, MetricsError> {
        if actual.len() != predicted.len() {
            return Err(MetricsError::LengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(MetricsError::EmptyLabels);
        }

        let mut classes: Vec<String> = actual.to_vec();
        classes.sort_unstable();
        classes.dedup();

        Ok(Self { actual, predicted, classes })
    }

    /// Return the distinct classes observed in the actual labels, sorted.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Return the number of label pairs.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.actual.len()
    }

    /// Compute one-versus-rest confusion counts for `target`.
    #[must_use]
    pub fn confusion_counts(&self, target: &str) -> ConfusionCounts {
        ConfusionCounts::from_pairs(self.actual, self.predicted, target)
    }

    /// Precision for `target`: TP / (TP + FP), 0.0 when nothing was
    /// predicted as `target`.
    #[must_use]
    pub fn precision(&self, target: &str) -> f64 {
        let counts = self.confusion_counts(target);
        ratio_or_zero(counts.tp, counts.tp + counts.fp)
    }

    /// Recall for `target`: TP / (TP + FN), 0.0 when `target` has no true
    /// samples.
    #[must_use]
    pub fn recall(&self, target: &str) -> f64 {
        let counts = self.confusion_counts(target);
        ratio_or_zero(counts.tp, counts.tp + counts.fn_)
    }

    /// F1 score for `target`, 0.0 when precision and recall are both zero.
    #[must_use]
    pub fn f1(&self, target: &str) -> f64 {
        let precision = self.precision(target);
        let recall = self.recall(target);
        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }

    /// Overall accuracy: proportion of pairs where predicted equals actual.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let correct = self
            .actual
            .iter()
            .zip(self.predicted.iter())
            .filter(|(a, p)| a == p)
            .count();
        correct as f64 / self.actual.len() as f64
    }

    /// Unweighted mean precision across the class set.
    #[must_use]
    pub fn macro_precision(&self) -> f64 {
        self.macro_mean(|c| self.precision(c))
    }

    /// Unweighted mean recall across the class set.
    #[must_use]
    pub fn macro_recall(&self) -> f64 {
        self.macro_mean(|c| self.recall(c))
    }

    /// Unweighted mean F1 across the class set.
    #[must_use]
    pub fn macro_f1(&self) -> f64 {
        self.macro_mean(|c| self.f1(c))
    }

    /// Support-weighted mean precision across the class set.
    #[must_use]
    pub fn weighted_precision(&self) -> f64 {
        self.weighted_mean(|c| self.precision(c))
    }

    /// Support-weighted mean recall across the class set.
    #[must_use]
    pub fn weighted_recall(&self) -> f64 {
        self.weighted_mean(|c| self.recall(c))
    }

    /// Support-weighted mean F1 across the class set.
    #[must_use]
    pub fn weighted_f1(&self) -> f64 {
        self.weighted_mean(|c| self.f1(c))
    }

    /// Number of occurrences of `target` in the actual labels.
    #[must_use]
    pub fn support(&self, target: &str) -> usize {
        self.actual.iter().filter(|a| a.as_str() == target).count()
    }

    /// Support per class, keyed by class label.
    #[must_use]
    pub fn support_map(&self) -> BTreeMap<String, usize> {
        self.classes
            .iter()
            .map(|c| (c.clone(), self.support(c)))
            .collect()
    }

    /// Per-class precision, recall, F1, and support, in class order.
    #[must_use]
    pub fn class_metrics(&self) -> Vec<ClassMetrics> {
        self.classes
            .iter()
            .map(|c| ClassMetrics {
                class: c.clone(),
                precision: self.precision(c),
                recall: self.recall(c),
                f1: self.f1(c),
                support: self.support(c),
            })
            .collect()
    }

    fn macro_mean(&self, metric: impl Fn(&str) -> f64) -> f64 {
        let sum: f64 = self.classes.iter().map(|c| metric(c)).sum();
        sum / self.classes.len() as f64
    }

    /// Weights are support / total and sum to 1.0 over the class set.
    fn weighted_mean(&self, metric: impl Fn(&str) -> f64) -> f64 {
        let total = self.actual.len() as f64;
        self.classes
            .iter()
            .map(|c| metric(c) * (self.support(c) as f64 / total))
            .sum()
    }
}

fn ratio_or_zero(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn length_mismatch_rejected() {
        let actual = labels(&["B", "M"]);
        let predicted = labels(&["B"]);
        let err = Evaluation::new(&actual, &predicted).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::LengthMismatch { actual: 2, predicted: 1 }
        ));
    }

    #[test]
    fn empty_labels_rejected() {
        let actual: Vec<String> = vec![];
        let predicted: Vec<String> = vec![];
        let err = Evaluation::new(&actual, &predicted).unwrap_err();
        assert!(matches!(err, MetricsError::EmptyLabels));
    }

    #[test]
    fn classes_sorted_and_deduplicated() {
        let actual = labels(&["M", "B", "M", "B", "B"]);
        let predicted = labels(&["M", "B", "M", "B", "B"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        assert_eq!(eval.classes(), &["B".to_string(), "M".to_string()]);
    }

    #[test]
    fn predicted_only_labels_excluded_from_class_set() {
        let actual = labels(&["B", "B"]);
        let predicted = labels(&["B", "X"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        assert_eq!(eval.classes(), &["B".to_string()]);
    }

    #[test]
    fn perfect_predictions_all_ones() {
        let actual = labels(&["B", "M", "B", "M"]);
        let predicted = labels(&["B", "M", "B", "M"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        assert_eq!(eval.accuracy(), 1.0);
        for class in ["B", "M"] {
            assert_eq!(eval.precision(class), 1.0);
            assert_eq!(eval.recall(class), 1.0);
            assert_eq!(eval.f1(class), 1.0);
        }
    }

    #[test]
    fn all_wrong_accuracy_zero() {
        let actual = labels(&["B", "M"]);
        let predicted = labels(&["M", "B"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        assert_eq!(eval.accuracy(), 0.0);
    }

    #[test]
    fn known_scenario_matches_hand_computation() {
        let actual = labels(&["B", "B", "M", "M"]);
        let predicted = labels(&["B", "M", "M", "M"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();

        assert!((eval.accuracy() - 0.75).abs() < 1e-12);
        assert!((eval.precision("M") - 2.0 / 3.0).abs() < 1e-12);
        assert!((eval.recall("M") - 1.0).abs() < 1e-12);
        assert!((eval.f1("M") - 0.8).abs() < 1e-12);
        assert!((eval.precision("B") - 1.0).abs() < 1e-12);
        assert!((eval.recall("B") - 0.5).abs() < 1e-12);
        assert!((eval.f1("B") - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_denominator_returns_zero_not_error() {
        // "M" is never predicted -> precision denominator is 0.
        let actual = labels(&["M", "M", "B"]);
        let predicted = labels(&["B", "B", "B"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        assert_eq!(eval.precision("M"), 0.0);
        assert_eq!(eval.f1("M"), 0.0);
    }

    #[test]
    fn macro_equals_weighted_for_equal_support() {
        let actual = labels(&["B", "B", "M", "M"]);
        let predicted = labels(&["B", "M", "M", "B"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        assert!((eval.macro_f1() - eval.weighted_f1()).abs() < 1e-12);
        assert!((eval.macro_precision() - eval.weighted_precision()).abs() < 1e-12);
        assert!((eval.macro_recall() - eval.weighted_recall()).abs() < 1e-12);
    }

    #[test]
    fn weighted_differs_from_macro_for_skewed_support() {
        let actual = labels(&["B", "B", "B", "M"]);
        let predicted = labels(&["B", "B", "B", "B"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        // Recall: B = 1.0 (support 3), M = 0.0 (support 1).
        assert!((eval.macro_recall() - 0.5).abs() < 1e-12);
        assert!((eval.weighted_recall() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn support_counts_actual_occurrences() {
        let actual = labels(&["B", "M", "B", "B"]);
        let predicted = labels(&["M", "M", "B", "B"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        assert_eq!(eval.support("B"), 3);
        assert_eq!(eval.support("M"), 1);

        let map = eval.support_map();
        assert_eq!(map.get("B"), Some(&3));
        assert_eq!(map.get("M"), Some(&1));
    }

    #[test]
    fn class_metrics_rows_match_scalar_accessors() {
        let actual = labels(&["B", "B", "M", "M"]);
        let predicted = labels(&["B", "M", "M", "M"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        let rows = eval.class_metrics();
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.precision, eval.precision(&row.class));
            assert_eq!(row.recall, eval.recall(&row.class));
            assert_eq!(row.f1, eval.f1(&row.class));
            assert_eq!(row.support, eval.support(&row.class));
        }
    }

    #[test]
    fn metrics_recomputable_in_any_order() {
        let actual = labels(&["B", "M", "M"]);
        let predicted = labels(&["B", "B", "M"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        let f1_first = eval.f1("M");
        let _ = eval.accuracy();
        let _ = eval.weighted_precision();
        assert_eq!(eval.f1("M"), f1_first);
    }
}
