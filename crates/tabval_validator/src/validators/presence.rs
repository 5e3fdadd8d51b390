//! Presence validators: empty, not empty, and the always-pass `Ignore`.

use tabval_core::{Outcome, Row, Validator};

/// Validates that a value is the empty string.
///
/// This is the default validator for a column declared with an empty rule
/// list.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyValidator;

impl Validator for EmptyValidator {
    fn name(&self) -> &str {
        "EmptyValidator"
    }

    fn validate(&mut self, value: &str, _row: &Row) -> Outcome {
        Outcome::check(value.is_empty(), || format!("'{}' is not empty", value))
    }
}

/// Validates that a value is not the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmptyValidator;

impl Validator for NotEmptyValidator {
    fn name(&self) -> &str {
        "NotEmptyValidator"
    }

    fn validate(&mut self, value: &str, _row: &Row) -> Outcome {
        Outcome::check(!value.is_empty(), || "value is empty".to_string())
    }
}

/// Accepts every value, opting a column out of checking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl Validator for Ignore {
    fn name(&self) -> &str {
        "Ignore"
    }

    fn validate(&mut self, _value: &str, _row: &Row) -> Outcome {
        Outcome::Valid
    }
}
