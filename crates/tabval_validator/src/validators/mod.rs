//! Built-in column validators.
//!
//! Every validator here implements [`tabval_core::Validator`]. Rules declared
//! in a [`RuleDefinition`] are turned into boxed validators with
//! [`build_validator`].

mod cast;
mod pattern;
mod presence;
mod range;
mod set;
mod unique;

pub use cast::{CastTarget, CastValidator, FloatValidator, IntValidator};
pub use pattern::RegexValidator;
pub use presence::{EmptyValidator, Ignore, NotEmptyValidator};
pub use range::RangeValidator;
pub use set::SetValidator;
pub use unique::UniqueValidator;

use tabval_core::{ConfigError, RuleDefinition, Validator};

/// Builds a fresh validator for a declared rule.
///
/// # Errors
///
/// Returns `ConfigError::InvalidParameter` for malformed parameters: an
/// uncompilable pattern, invalid range bounds, or an empty value set that
/// would reject every value.
pub fn build_validator(rule: &RuleDefinition) -> Result<Box<dyn Validator>, ConfigError> {
    let validator: Box<dyn Validator> = match rule {
        RuleDefinition::Int { empty_ok } => Box::new(IntValidator::new().empty_ok(*empty_ok)),
        RuleDefinition::Float { empty_ok } => Box::new(FloatValidator::new().empty_ok(*empty_ok)),
        RuleDefinition::Set { values, empty_ok } => {
            if values.is_empty() && !empty_ok {
                return Err(ConfigError::invalid_parameter(
                    "SetValidator",
                    "value set is empty",
                ));
            }
            Box::new(SetValidator::new(values.iter().cloned()).empty_ok(*empty_ok))
        }
        RuleDefinition::Unique {
            unique_with,
            empty_ok,
        } => Box::new(
            UniqueValidator::new()
                .unique_with(unique_with.iter().cloned())
                .empty_ok(*empty_ok),
        ),
        RuleDefinition::Regex {
            pattern,
            full,
            empty_ok,
        } => Box::new(RegexValidator::new(pattern.as_str(), *full)?.empty_ok(*empty_ok)),
        RuleDefinition::Range {
            low,
            high,
            empty_ok,
        } => Box::new(RangeValidator::new(*low, *high)?.empty_ok(*empty_ok)),
        RuleDefinition::Empty => Box::new(EmptyValidator),
        RuleDefinition::NotEmpty => Box::new(NotEmptyValidator),
        RuleDefinition::Ignore => Box::new(Ignore),
    };
    Ok(validator)
}
