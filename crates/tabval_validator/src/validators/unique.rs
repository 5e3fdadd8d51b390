//! Cross-row uniqueness validator.

use std::collections::HashSet;

use tabval_core::{Outcome, Row, Validator};

/// Validates that a value has not been seen before in the current run.
///
/// With `unique_with`, the key is the ordered tuple of this column's value
/// followed by the listed sibling values, so `(a, b)` and `(b, a)` are
/// different keys. The first occurrence of a key is valid, every later one is
/// not. Seen keys are kept until [`Validator::reset`] is called, which the
/// engine does at the start of every run.
#[derive(Debug, Clone, Default)]
pub struct UniqueValidator {
    unique_with: Vec<String>,
    empty_ok: bool,
    seen: HashSet<Vec<String>>,
}

impl UniqueValidator {
    /// Creates a new single-column uniqueness validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sibling columns forming a composite key with this one.
    pub fn unique_with<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_with = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether empty values are accepted without being tracked.
    pub fn empty_ok(mut self, empty_ok: bool) -> Self {
        self.empty_ok = empty_ok;
        self
    }

    /// Number of distinct keys seen so far in this run.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

impl Validator for UniqueValidator {
    fn name(&self) -> &str {
        "UniqueValidator"
    }

    fn validate(&mut self, value: &str, row: &Row) -> Outcome {
        if self.empty_ok && value.is_empty() {
            return Outcome::Valid;
        }

        let context: Vec<(String, String)> = self
            .unique_with
            .iter()
            .map(|column| (column.clone(), row.get(column).cloned().unwrap_or_default()))
            .collect();

        let mut key = Vec::with_capacity(context.len() + 1);
        key.push(value.to_string());
        key.extend(context.iter().map(|(_, v)| v.clone()));

        if self.seen.insert(key) {
            return Outcome::Valid;
        }

        if context.is_empty() {
            Outcome::invalid(format!("'{}' is not unique", value))
        } else {
            let siblings: Vec<String> = context
                .iter()
                .map(|(column, v)| format!("{}='{}'", column, v))
                .collect();
            Outcome::invalid_with_context(
                format!("'{}' is not unique with {}", value, siblings.join(", ")),
                context,
            )
        }
    }

    fn reset(&mut self) {
        self.seen.clear();
    }

    fn dependencies(&self) -> &[String] {
        &self.unique_with
    }

    fn describe(&self) -> String {
        let mut options = Vec::new();
        if !self.unique_with.is_empty() {
            options.push(format!("unique_with=[{}]", self.unique_with.join(", ")));
        }
        if self.empty_ok {
            options.push("empty_ok".to_string());
        }

        if options.is_empty() {
            "UniqueValidator".to_string()
        } else {
            format!("UniqueValidator({})", options.join(", "))
        }
    }
}
