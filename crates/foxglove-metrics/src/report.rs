//! Classification report table rendering.

use std::fmt;

use crate::engine::{ClassMetrics, Evaluation};

/// A rendered classification report: per-class rows plus macro and weighted
/// averages and overall accuracy.
///
/// Snapshot of an [`Evaluation`] taken at construction; implements
/// [`fmt::Display`] as a fixed-width table.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    rows: Vec<ClassMetrics>,
    macro_precision: f64,
    macro_recall: f64,
    macro_f1: f64,
    weighted_precision: f64,
    weighted_recall: f64,
    weighted_f1: f64,
    accuracy: f64,
    n_samples: usize,
}

impl ClassificationReport {
    /// Build a report from an evaluation.
    #[must_use]
    pub fn from_evaluation(eval: &Evaluation<'_>) -> Self {
        Self {
            rows: eval.class_metrics(),
            macro_precision: eval.macro_precision(),
            macro_recall: eval.macro_recall(),
            macro_f1: eval.macro_f1(),
            weighted_precision: eval.weighted_precision(),
            weighted_recall: eval.weighted_recall(),
            weighted_f1: eval.weighted_f1(),
            accuracy: eval.accuracy(),
            n_samples: eval.n_samples(),
        }
    }

    /// Return the per-class rows in class order.
    #[must_use]
    pub fn rows(&self) -> &[ClassMetrics] {
        &self.rows
    }

    /// Return the overall accuracy.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<14} {:>10} {:>10} {:>10} {:>8}",
            "class", "precision", "recall", "f1", "support"
        )?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<14} {:>10.4} {:>10.4} {:>10.4} {:>8}",
                row.class, row.precision, row.recall, row.f1, row.support
            )?;
        }

        writeln!(
            f,
            "{:<14} {:>10.4} {:>10.4} {:>10.4} {:>8}",
            "macro avg", self.macro_precision, self.macro_recall, self.macro_f1, self.n_samples
        )?;
        writeln!(
            f,
            "{:<14} {:>10.4} {:>10.4} {:>10.4} {:>8}",
            "weighted avg",
            self.weighted_precision,
            self.weighted_recall,
            self.weighted_f1,
            self.n_samples
        )?;
        writeln!(f, "accuracy: {:.4}", self.accuracy)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn report_contains_class_rows_and_aggregates() {
        let actual = labels(&["B", "B", "M", "M"]);
        let predicted = labels(&["B", "M", "M", "M"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        let report = ClassificationReport::from_evaluation(&eval);

        let output = format!("{report}");
        assert!(output.contains("class"));
        assert!(output.contains("B"));
        assert!(output.contains("M"));
        assert!(output.contains("macro avg"));
        assert!(output.contains("weighted avg"));
        assert!(output.contains("accuracy: 0.7500"));
    }

    #[test]
    fn rows_match_evaluation_order() {
        let actual = labels(&["M", "B", "M"]);
        let predicted = labels(&["M", "B", "B"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        let report = ClassificationReport::from_evaluation(&eval);
        let classes: Vec<&str> = report.rows().iter().map(|r| r.class.as_str()).collect();
        assert_eq!(classes, vec!["B", "M"]);
    }

    #[test]
    fn accuracy_accessor_matches_evaluation() {
        let actual = labels(&["B", "M"]);
        let predicted = labels(&["B", "M"]);
        let eval = Evaluation::new(&actual, &predicted).unwrap();
        let report = ClassificationReport::from_evaluation(&eval);
        assert_eq!(report.accuracy(), 1.0);
    }
}
