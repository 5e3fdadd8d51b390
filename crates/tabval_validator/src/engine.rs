//! Main validation engine.
//!
//! [`DataValidator`] owns a schema and run options. Each call to
//! [`DataValidator::validate`] resets validator state, binds the schema to
//! the source header, streams every row through the bound validators and
//! returns one [`ValidationReport`].

use crate::{Binding, FailureAggregator, Schema, Source, Table, ValidationError, bind};
use std::time::Instant;
use tabval_core::{
    Outcome, Row, ValidationContext, ValidationFailure, ValidationOutcome, ValidationReport,
    ValidationStats,
};
use tracing::{info, warn};

/// Validation engine for one schema.
///
/// The engine can be run any number of times. Per-run validator state (the
/// values a uniqueness rule has seen) is discarded at the start of every
/// run, so results never leak between sources.
///
/// # Example
///
/// ```rust
/// use tabval_validator::{DataSet, DataValidator, Schema, SetValidator, UniqueValidator};
///
/// let schema = Schema::new()
///     .rule("Column A", UniqueValidator::new())
///     .rule("Column B", SetValidator::new(["Vampire", "Not A Vampire"]));
/// let data = DataSet::new(["Column A", "Column B"])
///     .row(["Vlad the Impaler", "Vampire"])
///     .row(["Dracula", "Vampire"])
///     .row(["Count Chocula", "Not A Vampire"]);
///
/// let mut validator = DataValidator::new(schema);
/// let report = validator.validate(&data).unwrap();
///
/// if report.passed() {
///     println!("Passed! :)");
/// }
/// ```
#[derive(Debug)]
pub struct DataValidator {
    schema: Schema,
    context: ValidationContext,
}

impl DataValidator {
    /// Creates a new engine with default run options.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            context: ValidationContext::default(),
        }
    }

    /// Sets the run options.
    pub fn with_context(mut self, context: ValidationContext) -> Self {
        self.context = context;
        self
    }

    /// Returns the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the run options.
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Validates a source against the schema.
    ///
    /// Field values that break a rule are reported in the returned report,
    /// never as an error.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Config` when the schema cannot be bound to
    /// the header, and `ValidationError::Io`, `ValidationError::Csv` or
    /// `ValidationError::RowLength` when the source itself is unreadable.
    pub fn validate<S>(&mut self, source: &S) -> Result<ValidationReport, ValidationError>
    where
        S: Source + ?Sized,
    {
        let start = Instant::now();
        let source_name = source.describe();
        info!("Validating {}", source_name);

        self.schema.reset();

        let Table { header, rows } = source.open()?;
        let mut warnings = Vec::new();

        match bind(&mut self.schema, &header, &self.context)? {
            Binding::Mismatch(mismatch) => {
                warn!(
                    "Schema does not match the header of {}: {} missing, {} unused",
                    source_name,
                    mismatch.missing.len(),
                    mismatch.unused.len()
                );
                return Ok(ValidationReport {
                    source: source_name,
                    outcome: ValidationOutcome::SchemaMismatch(mismatch),
                    warnings,
                    stats: ValidationStats {
                        duration_ms: start.elapsed().as_millis() as u64,
                        ..ValidationStats::default()
                    },
                });
            }
            Binding::Bound { skipped } => {
                warnings.extend(
                    skipped
                        .into_iter()
                        .map(|column| format!("Column '{}' has no validators and was skipped", column)),
                );
            }
        }

        let mut aggregator = FailureAggregator::new();
        let mut stats = ValidationStats::default();
        let limit = self.context.sample_size.unwrap_or(usize::MAX);

        for (index, record) in rows.take(limit).enumerate() {
            let values = record?;
            let row_number = index + 1;
            if values.len() != header.len() {
                return Err(ValidationError::row_length(
                    &source_name,
                    row_number,
                    header.len(),
                    values.len(),
                ));
            }

            let row: Row = header.iter().cloned().zip(values).collect();

            for (column, validators) in self.schema.iter_mut() {
                let value = row.get(column).map(String::as_str).unwrap_or_default();
                stats.fields_checked += 1;

                for validator in validators.iter_mut() {
                    stats.validations_run += 1;
                    if let Outcome::Invalid(violation) = validator.validate(value, &row) {
                        aggregator.record(&ValidationFailure {
                            column: column.to_string(),
                            validator: validator.name().to_string(),
                            value: value.to_string(),
                            row: row_number,
                            violation,
                        });
                    }
                }
            }

            stats.rows_validated += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        if aggregator.is_empty() {
            info!("{} passed ({} rows)", source_name, stats.rows_validated);
        } else {
            info!(
                "{} failed: {} invalid values in {} rows",
                source_name,
                aggregator.total(),
                stats.rows_validated
            );
        }

        Ok(ValidationReport {
            source: source_name,
            outcome: aggregator.into_outcome(),
            warnings,
            stats,
        })
    }
}
