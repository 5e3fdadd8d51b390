//! Validation report types.
//!
//! A run produces exactly one [`ValidationReport`]. Its outcome is either a
//! pass, a schema mismatch detected while binding (no rows were read), or a
//! failure map aggregated over every row.

use crate::Violation;
use indexmap::{IndexMap, IndexSet};

/// Identity of a bound validator for reporting: the column plus rule name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FailureKey {
    /// Column the validator is bound to
    pub column: String,
    /// Rule name (e.g. "SetValidator")
    pub validator: String,
}

impl FailureKey {
    /// Creates a new failure key.
    pub fn new(column: impl Into<String>, validator: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            validator: validator.into(),
        }
    }
}

/// Aggregated failures of one validator on one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureSummary {
    /// Number of rejected values, duplicates included
    pub count: usize,
    /// Distinct rejected values in order of first occurrence
    pub invalid_values: IndexSet<String>,
}

impl FailureSummary {
    /// Records one rejected value.
    pub fn record(&mut self, value: &str) {
        self.count += 1;
        if !self.invalid_values.contains(value) {
            self.invalid_values.insert(value.to_string());
        }
    }

    /// Rejected values per row.
    ///
    /// Validators with the same name on one column share a failure key, so
    /// their rejections add up and the rate can exceed `1.0`.
    pub fn failure_rate(&self, rows: usize) -> f64 {
        if rows == 0 {
            return 0.0;
        }
        self.count as f64 / rows as f64
    }
}

/// Failure map: (column, validator) to aggregated failures, ordered by first
/// failure.
pub type FailureMap = IndexMap<FailureKey, FailureSummary>;

/// A single rejected field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Column the value belongs to
    pub column: String,
    /// Rule name that rejected it
    pub validator: String,
    /// The raw field value
    pub value: String,
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    /// Reason and sibling context reported by the validator
    pub violation: Violation,
}

impl ValidationFailure {
    /// Returns the failure key this witness is aggregated under.
    pub fn key(&self) -> FailureKey {
        FailureKey::new(&self.column, &self.validator)
    }
}

/// Disagreement between the declared columns and a source header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMismatch {
    /// Header columns without a declaration, in header order
    pub missing: Vec<String>,
    /// Declared columns absent from the header, in declaration order
    pub unused: Vec<String>,
}

impl SchemaMismatch {
    /// Returns true if header and declarations agree.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }

    /// Renders the missing columns as declarations with empty rule lists,
    /// ready to be pasted into a schema.
    pub fn suggestion(&self) -> String {
        render_listing(&self.missing)
    }

    /// Renders the unused declarations in the same listing format.
    pub fn unused_listing(&self) -> String {
        render_listing(&self.unused)
    }
}

/// One `'<column>': [],` line per column, sorted by name.
fn render_listing(columns: &[String]) -> String {
    let mut sorted: Vec<&String> = columns.iter().collect();
    sorted.sort();
    sorted
        .into_iter()
        .map(|column| format!("'{}': [],", column))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final verdict of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Every value of every row satisfied its validators
    Passed,
    /// Binding failed; no rows were validated
    SchemaMismatch(SchemaMismatch),
    /// At least one value was rejected
    Failed(FailureMap),
}

/// Statistics about a validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationStats {
    /// Number of data rows validated
    pub rows_validated: usize,

    /// Number of field values checked
    pub fields_checked: usize,

    /// Number of validator invocations
    pub validations_run: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

/// Report of one validation run over one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Description of the validated source
    pub source: String,

    /// Verdict and failure data
    pub outcome: ValidationOutcome,

    /// Non-fatal notices, e.g. undeclared columns that were skipped
    pub warnings: Vec<String>,

    /// Run statistics
    pub stats: ValidationStats,
}

impl ValidationReport {
    /// Returns true if the run passed.
    pub fn passed(&self) -> bool {
        matches!(self.outcome, ValidationOutcome::Passed)
    }

    /// Returns the failure map, empty unless the run failed on field values.
    pub fn failures(&self) -> Option<&FailureMap> {
        match &self.outcome {
            ValidationOutcome::Failed(failures) => Some(failures),
            _ => None,
        }
    }

    /// Returns the schema mismatch, if binding failed.
    pub fn mismatch(&self) -> Option<&SchemaMismatch> {
        match &self.outcome {
            ValidationOutcome::SchemaMismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_counts_duplicates_lists_once() {
        let mut summary = FailureSummary::default();
        summary.record("b");
        summary.record("a");
        summary.record("b");

        assert_eq!(summary.count, 3);
        assert_eq!(
            summary.invalid_values.iter().collect::<Vec<_>>(),
            vec!["b", "a"]
        );
    }

    #[test]
    fn test_failure_rate() {
        let mut summary = FailureSummary::default();
        summary.record("x");
        assert_eq!(summary.failure_rate(4), 0.25);
        assert_eq!(summary.failure_rate(0), 0.0);
    }

    #[test]
    fn test_failure_rate_of_shared_key_exceeds_one() {
        let mut summary = FailureSummary::default();
        summary.record("C");
        summary.record("C");
        assert_eq!(summary.failure_rate(1), 2.0);
    }

    #[test]
    fn test_mismatch_suggestion_is_sorted() {
        let mismatch = SchemaMismatch {
            missing: vec!["Column C".to_string(), "Column A".to_string()],
            unused: vec!["old".to_string()],
        };

        assert!(!mismatch.is_empty());
        assert_eq!(mismatch.suggestion(), "'Column A': [],\n'Column C': [],");
        assert_eq!(mismatch.unused_listing(), "'old': [],");
        assert!(SchemaMismatch::default().is_empty());
    }

    #[test]
    fn test_report_accessors() {
        let mut failures = FailureMap::new();
        failures
            .entry(FailureKey::new("col", "EmptyValidator"))
            .or_default()
            .record("x");

        let mut report = ValidationReport {
            source: "memory".to_string(),
            outcome: ValidationOutcome::Failed(failures),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        };
        report.add_warning("skipped column 'extra'");

        assert!(!report.passed());
        assert!(report.mismatch().is_none());
        assert_eq!(report.failures().unwrap().len(), 1);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_failure_key_from_witness() {
        let failure = ValidationFailure {
            column: "id".to_string(),
            validator: "UniqueValidator".to_string(),
            value: "7".to_string(),
            row: 3,
            violation: Violation {
                message: "duplicate".to_string(),
                context: Vec::new(),
            },
        };
        assert_eq!(failure.key(), FailureKey::new("id", "UniqueValidator"));
    }
}
