//! Type-cast validators.
//!
//! A cast validator accepts a value if it converts losslessly to the target
//! numeric type. Conversion is strict: surrounding whitespace, digit
//! separators and fractional integers are rejected.

use std::marker::PhantomData;
use std::str::FromStr;

use tabval_core::{Outcome, Row, Validator};

/// A numeric type a [`CastValidator`] can check for.
pub trait CastTarget: FromStr {
    /// Rule name reported for failures
    const VALIDATOR: &'static str;
    /// Type name used in failure messages
    const TYPE: &'static str;
}

impl CastTarget for i64 {
    const VALIDATOR: &'static str = "IntValidator";
    const TYPE: &'static str = "int";
}

impl CastTarget for f64 {
    const VALIDATOR: &'static str = "FloatValidator";
    const TYPE: &'static str = "float";
}

/// Validates that a value parses as `T`.
#[derive(Debug, Clone)]
pub struct CastValidator<T> {
    empty_ok: bool,
    _target: PhantomData<fn() -> T>,
}

/// Validates that a value is a signed 64-bit integer.
pub type IntValidator = CastValidator<i64>;

/// Validates that a value is a 64-bit float.
pub type FloatValidator = CastValidator<f64>;

impl<T: CastTarget> CastValidator<T> {
    /// Creates a new cast validator that rejects empty values.
    pub fn new() -> Self {
        Self {
            empty_ok: false,
            _target: PhantomData,
        }
    }

    /// Sets whether the empty string is accepted.
    pub fn empty_ok(mut self, empty_ok: bool) -> Self {
        self.empty_ok = empty_ok;
        self
    }
}

impl<T: CastTarget> Default for CastValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CastTarget> Validator for CastValidator<T> {
    fn name(&self) -> &str {
        T::VALIDATOR
    }

    fn validate(&mut self, value: &str, _row: &Row) -> Outcome {
        if self.empty_ok && value.is_empty() {
            return Outcome::Valid;
        }
        Outcome::check(value.parse::<T>().is_ok(), || {
            format!("'{}' is not a valid {}", value, T::TYPE)
        })
    }

    fn describe(&self) -> String {
        if self.empty_ok {
            format!("{}(empty_ok)", T::VALIDATOR)
        } else {
            T::VALIDATOR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<V: Validator>(validator: &mut V, value: &str) -> bool {
        validator.validate(value, &Row::new()).is_valid()
    }

    #[test]
    fn test_int_validator() {
        let mut validator = IntValidator::new();
        assert!(check(&mut validator, "42"));
        assert!(check(&mut validator, "-7"));
        assert!(check(&mut validator, "+7"));
        assert!(!check(&mut validator, ""));
        assert!(!check(&mut validator, "4.2"));
        assert!(!check(&mut validator, "abc"));
        assert!(!check(&mut validator, " 42"));
        assert!(!check(&mut validator, "99999999999999999999"));
    }

    #[test]
    fn test_int_validator_empty_ok() {
        let mut validator = IntValidator::new().empty_ok(true);
        assert!(check(&mut validator, ""));
        assert!(check(&mut validator, "1"));
        assert!(!check(&mut validator, "one"));
    }

    #[test]
    fn test_float_validator() {
        let mut validator = FloatValidator::new();
        assert!(check(&mut validator, "42"));
        assert!(check(&mut validator, "4.2"));
        assert!(check(&mut validator, "-1e10"));
        assert!(check(&mut validator, "inf"));
        assert!(!check(&mut validator, ""));
        assert!(!check(&mut validator, "4,2"));
        assert!(!check(&mut validator, "abc"));
    }

    #[test]
    fn test_names_and_messages() {
        let mut validator = IntValidator::new();
        assert_eq!(validator.name(), "IntValidator");
        assert_eq!(FloatValidator::new().name(), "FloatValidator");
        assert_eq!(
            validator.validate("x", &Row::new()),
            Outcome::invalid("'x' is not a valid int")
        );
        assert_eq!(
            FloatValidator::new().empty_ok(true).describe(),
            "FloatValidator(empty_ok)"
        );
    }
}
