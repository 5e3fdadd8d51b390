//! Failure aggregation.

use tabval_core::{FailureMap, ValidationFailure, ValidationOutcome};
use tracing::debug;

/// Folds failure witnesses into a [`FailureMap`].
///
/// Witnesses are logged at debug level and then reduced to a count plus the
/// distinct rejected values, so memory grows with distinct failures rather
/// than with rows.
#[derive(Debug, Default)]
pub struct FailureAggregator {
    failures: FailureMap,
    total: usize,
}

impl FailureAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one rejected value.
    pub fn record(&mut self, failure: &ValidationFailure) {
        debug!(
            row = failure.row,
            column = %failure.column,
            validator = %failure.validator,
            value = %failure.value,
            "{}",
            failure.violation.message
        );

        self.total += 1;
        self.failures
            .entry(failure.key())
            .or_default()
            .record(&failure.value);
    }

    /// Total number of rejected values across all keys.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns true if nothing was rejected.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the failures recorded so far.
    pub fn failures(&self) -> &FailureMap {
        &self.failures
    }

    /// Turns the aggregate into a verdict.
    pub fn into_outcome(self) -> ValidationOutcome {
        if self.failures.is_empty() {
            ValidationOutcome::Passed
        } else {
            ValidationOutcome::Failed(self.failures)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabval_core::{FailureKey, Violation};

    fn failure(column: &str, validator: &str, value: &str, row: usize) -> ValidationFailure {
        ValidationFailure {
            column: column.to_string(),
            validator: validator.to_string(),
            value: value.to_string(),
            row,
            violation: Violation::new(format!("'{}' rejected", value)),
        }
    }

    #[test]
    fn test_empty_aggregate_passes() {
        let aggregator = FailureAggregator::new();
        assert!(aggregator.is_empty());
        assert_eq!(aggregator.into_outcome(), ValidationOutcome::Passed);
    }

    #[test]
    fn test_groups_by_column_and_validator() {
        let mut aggregator = FailureAggregator::new();
        aggregator.record(&failure("b", "SetValidator", "Maybe", 1));
        aggregator.record(&failure("a", "UniqueValidator", "1", 2));
        aggregator.record(&failure("b", "SetValidator", "Maybe", 3));
        aggregator.record(&failure("b", "SetValidator", "No", 4));

        assert_eq!(aggregator.total(), 4);
        assert_eq!(aggregator.failures().len(), 2);

        let failures = match aggregator.into_outcome() {
            ValidationOutcome::Failed(failures) => failures,
            other => panic!("expected failures, got {:?}", other),
        };

        let keys: Vec<&FailureKey> = failures.keys().collect();
        assert_eq!(
            keys,
            vec![
                &FailureKey::new("b", "SetValidator"),
                &FailureKey::new("a", "UniqueValidator"),
            ]
        );

        let set = &failures[&FailureKey::new("b", "SetValidator")];
        assert_eq!(set.count, 3);
        assert_eq!(
            set.invalid_values.iter().collect::<Vec<_>>(),
            vec!["Maybe", "No"]
        );
    }
}
