//! Regular expression validator.

use regex::Regex;
use tabval_core::{ConfigError, Outcome, Row, Validator};

/// Validates that a value matches a regular expression.
///
/// By default the pattern must match at the start of the value; with `full`
/// it must match the whole value.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: String,
    full: bool,
    empty_ok: bool,
    regex: Regex,
}

impl RegexValidator {
    /// Compiles a new regex validator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if the pattern does not compile.
    pub fn new(pattern: impl Into<String>, full: bool) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        let anchored = if full {
            format!("^(?:{})$", pattern)
        } else {
            format!("^(?:{})", pattern)
        };
        let regex = Regex::new(&anchored).map_err(|e| {
            ConfigError::invalid_parameter(
                "RegexValidator",
                format!("invalid pattern '{}': {}", pattern, e),
            )
        })?;

        Ok(Self {
            pattern,
            full,
            empty_ok: false,
            regex,
        })
    }

    /// Sets whether the empty string is accepted.
    pub fn empty_ok(mut self, empty_ok: bool) -> Self {
        self.empty_ok = empty_ok;
        self
    }
}

impl Validator for RegexValidator {
    fn name(&self) -> &str {
        "RegexValidator"
    }

    fn validate(&mut self, value: &str, _row: &Row) -> Outcome {
        if self.empty_ok && value.is_empty() {
            return Outcome::Valid;
        }
        Outcome::check(self.regex.is_match(value), || {
            format!("'{}' does not match pattern '{}'", value, self.pattern)
        })
    }

    fn describe(&self) -> String {
        let mut options = Vec::new();
        if self.full {
            options.push(", full");
        }
        if self.empty_ok {
            options.push(", empty_ok");
        }
        format!("RegexValidator('{}'{})", self.pattern, options.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match() {
        let mut validator = RegexValidator::new(r"di{2}ck", false).unwrap();
        let row = Row::new();

        assert!(validator.validate("diick", &row).is_valid());
        assert!(validator.validate("diickens", &row).is_valid());
        assert!(!validator.validate("a diick", &row).is_valid());
        assert!(!validator.validate("", &row).is_valid());
    }

    #[test]
    fn test_full_match() {
        let mut validator = RegexValidator::new(r"[0-9]{3}", true).unwrap();
        let row = Row::new();

        assert!(validator.validate("123", &row).is_valid());
        assert!(!validator.validate("1234", &row).is_valid());
        assert!(!validator.validate("12", &row).is_valid());
    }

    #[test]
    fn test_alternation_is_anchored_as_a_group() {
        let mut validator = RegexValidator::new("a|b", true).unwrap();
        assert!(!validator.validate("xb", &Row::new()).is_valid());
        assert!(!validator.validate("ax", &Row::new()).is_valid());
    }

    #[test]
    fn test_empty_ok() {
        let mut validator = RegexValidator::new("x", true).unwrap().empty_ok(true);
        assert!(validator.validate("", &Row::new()).is_valid());
        assert!(!validator.validate("y", &Row::new()).is_valid());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexValidator::new("(unclosed", false).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { .. }));
    }

    #[test]
    fn test_description() {
        let validator = RegexValidator::new("x+", true).unwrap();
        assert_eq!(validator.describe(), "RegexValidator('x+', full)");
    }
}
