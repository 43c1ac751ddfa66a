//! Scenario tests for the evaluation engine across whole report surfaces.

use foxglove_metrics::{ClassificationReport, Evaluation};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn diagnosis_scenario_full_report() {
    // 10 samples, 7 correct. B: tp=3 fp=2 fn=1; M: tp=4 fp=1 fn=2.
    let actual = labels(&["B", "B", "B", "B", "M", "M", "M", "M", "M", "M"]);
    let predicted = labels(&["B", "B", "B", "M", "B", "B", "M", "M", "M", "M"]);
    let eval = Evaluation::new(&actual, &predicted).unwrap();

    assert!((eval.accuracy() - 0.7).abs() < 1e-12);
    assert!((eval.precision("B") - 3.0 / 5.0).abs() < 1e-12);
    assert!((eval.recall("B") - 3.0 / 4.0).abs() < 1e-12);
    assert!((eval.precision("M") - 4.0 / 5.0).abs() < 1e-12);
    assert!((eval.recall("M") - 4.0 / 6.0).abs() < 1e-12);

    // Weights (0.4, 0.6) must sum to 1.0 over the class set.
    let weighted = eval.weighted_precision();
    let by_hand = 0.4 * (3.0 / 5.0) + 0.6 * (4.0 / 5.0);
    assert!((weighted - by_hand).abs() < 1e-12);

    let report = ClassificationReport::from_evaluation(&eval);
    assert_eq!(report.rows().len(), 2);
    assert!((report.accuracy() - 0.7).abs() < 1e-12);
}

#[test]
fn single_class_ground_truth() {
    // Every actual label is "B"; predicted-only "M" stays out of the class
    // set, so macro aggregates reduce to the single B row.
    let actual = labels(&["B", "B", "B"]);
    let predicted = labels(&["B", "M", "B"]);
    let eval = Evaluation::new(&actual, &predicted).unwrap();

    assert_eq!(eval.classes().len(), 1);
    assert!((eval.macro_recall() - eval.recall("B")).abs() < 1e-12);
    assert!((eval.weighted_recall() - eval.recall("B")).abs() < 1e-12);
    assert!((eval.accuracy() - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn three_class_report() {
    let actual = labels(&["a", "a", "b", "b", "c", "c"]);
    let predicted = labels(&["a", "b", "b", "b", "c", "a"]);
    let eval = Evaluation::new(&actual, &predicted).unwrap();

    assert_eq!(eval.classes(), &["a".to_string(), "b".to_string(), "c".to_string()]);
    assert!((eval.accuracy() - 4.0 / 6.0).abs() < 1e-12);

    // Equal support -> macro equals weighted for every metric.
    assert!((eval.macro_f1() - eval.weighted_f1()).abs() < 1e-12);

    let report = ClassificationReport::from_evaluation(&eval);
    assert_eq!(report.rows().len(), 3);
    let rendered = format!("{report}");
    for class in ["a", "b", "c"] {
        assert!(rendered.contains(class), "missing row for {class}");
    }
}

#[test]
fn confusion_counts_mutually_exclusive() {
    let actual = labels(&["a", "b", "c", "a", "b", "c", "a"]);
    let predicted = labels(&["b", "b", "c", "a", "c", "a", "a"]);
    let eval = Evaluation::new(&actual, &predicted).unwrap();
    for class in ["a", "b", "c"] {
        let counts = eval.confusion_counts(class);
        assert_eq!(counts.total(), 7, "buckets must partition the pairs");
    }
}
