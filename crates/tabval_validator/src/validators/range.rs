//! Numeric range validator.

use tabval_core::{ConfigError, Outcome, Row, Validator};

/// Validates that a value is a number within `[low, high]`.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    low: f64,
    high: f64,
    empty_ok: bool,
}

impl RangeValidator {
    /// Creates a new range validator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if a bound is not finite or
    /// `low` is greater than `high`.
    pub fn new(low: f64, high: f64) -> Result<Self, ConfigError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ConfigError::invalid_parameter(
                "RangeValidator",
                "bounds must be finite numbers",
            ));
        }
        if low > high {
            return Err(ConfigError::invalid_parameter(
                "RangeValidator",
                format!("low ({}) is greater than high ({})", low, high),
            ));
        }

        Ok(Self {
            low,
            high,
            empty_ok: false,
        })
    }

    /// Sets whether the empty string is accepted.
    pub fn empty_ok(mut self, empty_ok: bool) -> Self {
        self.empty_ok = empty_ok;
        self
    }
}

impl Validator for RangeValidator {
    fn name(&self) -> &str {
        "RangeValidator"
    }

    fn validate(&mut self, value: &str, _row: &Row) -> Outcome {
        if self.empty_ok && value.is_empty() {
            return Outcome::Valid;
        }
        match value.parse::<f64>() {
            Ok(number) if number >= self.low && number <= self.high => Outcome::Valid,
            Ok(_) => Outcome::invalid(format!(
                "'{}' is outside [{}, {}]",
                value, self.low, self.high
            )),
            Err(_) => Outcome::invalid(format!("'{}' is not a number", value)),
        }
    }

    fn describe(&self) -> String {
        if self.empty_ok {
            format!("RangeValidator({}, {}, empty_ok)", self.low, self.high)
        } else {
            format!("RangeValidator({}, {})", self.low, self.high)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let mut validator = RangeValidator::new(0.0, 10.0).unwrap();
        let row = Row::new();

        assert!(validator.validate("0", &row).is_valid());
        assert!(validator.validate("10", &row).is_valid());
        assert!(validator.validate("5.5", &row).is_valid());
        assert!(!validator.validate("-0.1", &row).is_valid());
        assert!(!validator.validate("10.01", &row).is_valid());
    }

    #[test]
    fn test_non_numbers() {
        let mut validator = RangeValidator::new(0.0, 10.0).unwrap();
        let row = Row::new();

        assert_eq!(
            validator.validate("ten", &row),
            Outcome::invalid("'ten' is not a number")
        );
        assert!(!validator.validate("", &row).is_valid());
        assert!(!validator.validate("NaN", &row).is_valid());
    }

    #[test]
    fn test_empty_ok() {
        let mut validator = RangeValidator::new(1.0, 2.0).unwrap().empty_ok(true);
        assert!(validator.validate("", &Row::new()).is_valid());
    }

    #[test]
    fn test_description() {
        let validator = RangeValidator::new(0.0, 1.5).unwrap();
        assert_eq!(validator.describe(), "RangeValidator(0, 1.5)");
        assert_eq!(
            validator.empty_ok(true).describe(),
            "RangeValidator(0, 1.5, empty_ok)"
        );
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(RangeValidator::new(5.0, 1.0).is_err());
        assert!(RangeValidator::new(f64::NAN, 1.0).is_err());
        assert!(RangeValidator::new(0.0, f64::INFINITY).is_err());
        assert!(RangeValidator::new(3.0, 3.0).is_ok());
    }
}
