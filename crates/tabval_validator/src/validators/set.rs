//! Set-membership validator.

use indexmap::IndexSet;
use tabval_core::{Outcome, Row, Validator};

/// Validates that a value is one of a fixed set.
///
/// Accepting empty values is the same as adding `""` to the set.
#[derive(Debug, Clone)]
pub struct SetValidator {
    valid_set: IndexSet<String>,
    empty_ok: bool,
}

impl SetValidator {
    /// Creates a new set validator.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid_set: values.into_iter().map(Into::into).collect(),
            empty_ok: false,
        }
    }

    /// Sets whether the empty string is accepted.
    pub fn empty_ok(mut self, empty_ok: bool) -> Self {
        self.empty_ok = empty_ok;
        self
    }

    fn render_set(&self) -> String {
        let values: Vec<String> = self.valid_set.iter().map(|v| format!("'{}'", v)).collect();
        format!("[{}]", values.join(", "))
    }
}

impl Validator for SetValidator {
    fn name(&self) -> &str {
        "SetValidator"
    }

    fn validate(&mut self, value: &str, _row: &Row) -> Outcome {
        if self.empty_ok && value.is_empty() {
            return Outcome::Valid;
        }
        Outcome::check(self.valid_set.contains(value), || {
            format!("'{}' is not in {}", value, self.render_set())
        })
    }

    fn describe(&self) -> String {
        if self.empty_ok {
            format!("SetValidator({}, empty_ok)", self.render_set())
        } else {
            format!("SetValidator({})", self.render_set())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let mut validator = SetValidator::new(["A", "B"]);
        let row = Row::new();

        assert!(validator.validate("A", &row).is_valid());
        assert!(!validator.validate("", &row).is_valid());
        assert!(!validator.validate("C", &row).is_valid());
        assert!(!validator.validate("a", &row).is_valid());
    }

    #[test]
    fn test_empty_ok() {
        let mut validator = SetValidator::new(["A", "B"]).empty_ok(true);
        let row = Row::new();

        assert!(validator.validate("", &row).is_valid());
        assert!(validator.validate("B", &row).is_valid());
        assert!(!validator.validate("C", &row).is_valid());
    }

    #[test]
    fn test_empty_string_member_behaves_like_empty_ok() {
        let mut validator = SetValidator::new(["A", ""]);
        assert!(validator.validate("", &Row::new()).is_valid());
    }

    #[test]
    fn test_message_and_description() {
        let mut validator = SetValidator::new(["Vampire", "Not A Vampire"]);
        assert_eq!(
            validator.validate("Maybe", &Row::new()),
            Outcome::invalid("'Maybe' is not in ['Vampire', 'Not A Vampire']")
        );
        assert_eq!(
            validator.describe(),
            "SetValidator(['Vampire', 'Not A Vampire'])"
        );
    }
}
