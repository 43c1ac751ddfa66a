//! Validated positive/negative class pair for binary classification.

use crate::error::KnnError;

/// The two class names a [`KnnClassifier`](crate::KnnClassifier) can vote between.
///
/// The signed-tally vote counts the positive class as +1 and the negative
/// class as -1. Binary only; extending the vote to more classes would need
/// an explicit tie-break rule and is deliberately not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPair {
    positive: String,
    negative: String,
}

impl ClassPair {
    /// Create a class pair from two distinct, non-empty class names.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`KnnError::EmptyClassName`] | Either name is empty |
    /// | [`KnnError::IdenticalClasses`] | The two names are equal |
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Result<Self, KnnError> {
        let positive = positive.into();
        let negative = negative.into();
        if positive.is_empty() || negative.is_empty() {
            return Err(KnnError::EmptyClassName);
        }
        if positive == negative {
            return Err(KnnError::IdenticalClasses { name: positive });
        }
        Ok(Self { positive, negative })
    }

    /// Return the positive class name.
    #[must_use]
    pub fn positive(&self) -> &str {
        &self.positive
    }

    /// Return the negative class name.
    #[must_use]
    pub fn negative(&self) -> &str {
        &self.negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_distinct_names() {
        let classes = ClassPair::new("B", "M").unwrap();
        assert_eq!(classes.positive(), "B");
        assert_eq!(classes.negative(), "M");
    }

    #[test]
    fn rejects_identical_names() {
        let err = ClassPair::new("B", "B").unwrap_err();
        assert!(matches!(err, KnnError::IdenticalClasses { .. }));
    }

    #[test]
    fn rejects_empty_positive() {
        let err = ClassPair::new("", "M").unwrap_err();
        assert!(matches!(err, KnnError::EmptyClassName));
    }

    #[test]
    fn rejects_empty_negative() {
        let err = ClassPair::new("B", "").unwrap_err();
        assert!(matches!(err, KnnError::EmptyClassName));
    }
}
