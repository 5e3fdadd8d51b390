//! Validator trait and run options.
//!
//! This module defines the contract every column rule implements. The engine
//! knows nothing about concrete rules beyond this trait, so user-defined
//! validators can be placed in a schema next to the built-in ones.

use indexmap::IndexMap;

/// A single data row: column name to raw field value, in header order.
pub type Row = IndexMap<String, String>;

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Human-readable reason
    pub message: String,

    /// Sibling field values that took part in the decision, e.g. the other
    /// members of a composite uniqueness key
    pub context: Vec<(String, String)>,
}

impl Violation {
    /// Creates a violation with no row context.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
        }
    }
}

/// Result of applying one validator to one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value satisfies the rule
    Valid,
    /// The value breaks the rule
    Invalid(Violation),
}

impl Outcome {
    /// Creates an invalid outcome with a reason and no row context.
    pub fn invalid(message: impl Into<String>) -> Self {
        Outcome::Invalid(Violation::new(message))
    }

    /// Creates an invalid outcome carrying sibling field values.
    pub fn invalid_with_context(
        message: impl Into<String>,
        context: Vec<(String, String)>,
    ) -> Self {
        Outcome::Invalid(Violation {
            message: message.into(),
            context,
        })
    }

    /// Returns `Valid` when `ok` holds, otherwise an invalid outcome whose
    /// message is built lazily.
    pub fn check(ok: bool, message: impl FnOnce() -> String) -> Self {
        if ok {
            Outcome::Valid
        } else {
            Outcome::invalid(message())
        }
    }

    /// Returns true if the value was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// Returns the violation, if any.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid(violation) => Some(violation),
        }
    }
}

/// Core trait for column rules.
///
/// A validator classifies one field value as valid or invalid. It may look at
/// sibling columns through `row` and may keep private state across rows of a
/// single run (uniqueness does). Bad data is never an error: it is reported
/// through [`Outcome::Invalid`]. Malformed rule parameters are rejected when
/// the validator is constructed, not here.
///
/// # Example
///
/// ```rust
/// use tabval_core::{Outcome, Row, Validator};
///
/// /// Requires the value to equal another column.
/// struct Matches {
///     other: Vec<String>,
/// }
///
/// impl Validator for Matches {
///     fn name(&self) -> &str {
///         "Matches"
///     }
///
///     fn dependencies(&self) -> &[String] {
///         &self.other
///     }
///
///     fn validate(&mut self, value: &str, row: &Row) -> Outcome {
///         let other = row.get(&self.other[0]).map(String::as_str).unwrap_or_default();
///         Outcome::check(value == other, || format!("'{}' != '{}'", value, other))
///     }
/// }
///
/// let mut rule = Matches { other: vec!["confirm".to_string()] };
/// let mut row = Row::new();
/// row.insert("confirm".to_string(), "secret".to_string());
/// assert!(rule.validate("secret", &row).is_valid());
/// ```
pub trait Validator: Send {
    /// Rule name, used verbatim as the validator half of a failure key.
    fn name(&self) -> &str;

    /// Classifies `value`, the field this validator is bound to, within `row`.
    fn validate(&mut self, value: &str, row: &Row) -> Outcome;

    /// Discards per-run state. Called by the engine before every run.
    fn reset(&mut self) {}

    /// Other columns this validator reads from the row.
    ///
    /// Binding rejects the schema if any of them is missing from the header.
    fn dependencies(&self) -> &[String] {
        &[]
    }

    /// Renders the rule with its configuration, e.g. `SetValidator(['A', 'B'])`.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

impl std::fmt::Debug for dyn Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Options for a validation run.
#[derive(Debug, Default, Clone)]
pub struct ValidationContext {
    /// Skip header columns that have no declaration instead of failing binding
    pub ignore_missing_validators: bool,

    /// Maximum number of data rows to validate
    pub sample_size: Option<usize>,
}

impl ValidationContext {
    /// Creates a new validation context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether undeclared header columns are tolerated.
    pub fn with_ignore_missing_validators(mut self, ignore: bool) -> Self {
        self.ignore_missing_validators = ignore;
        self
    }

    /// Limits the run to the first `size` data rows.
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }
}
