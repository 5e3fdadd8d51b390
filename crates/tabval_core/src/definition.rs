//! Declarative schema definitions.
//!
//! A `SchemaDefinition` is the serializable form of a schema: it names every
//! column and the rules that apply to it, without holding any live validator
//! state. Definitions are read from YAML or TOML files and compiled into a
//! runnable schema by the validation engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A schema definition for one kind of tabular file.
///
/// # Example
///
/// ```rust
/// use tabval_core::{RuleDefinition, SchemaDefinition};
/// use indexmap::IndexMap;
///
/// let mut columns = IndexMap::new();
/// columns.insert("id".to_string(), vec![RuleDefinition::unique()]);
/// columns.insert("notes".to_string(), vec![]);
///
/// let definition = SchemaDefinition {
///     name: "accounts".to_string(),
///     description: None,
///     delimiter: None,
///     default_rule: None,
///     columns,
/// };
/// assert_eq!(definition.column_names(), vec!["id", "notes"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Name identifying this schema
    pub name: String,

    /// Human-readable description of the data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Field delimiter of the data files (defaults to ',')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,

    /// Rule substituted for columns declared with an empty rule list
    /// (defaults to `empty`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rule: Option<RuleDefinition>,

    /// Column name to ordered rule list, in declaration order
    #[serde(default)]
    pub columns: IndexMap<String, Vec<RuleDefinition>>,
}

impl SchemaDefinition {
    /// Returns the declared column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Returns the total number of declared rules across all columns.
    pub fn rule_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }
}

/// A single column rule with its parameters.
///
/// Serialized with a `type` tag, e.g. `{ type: set, values: [A, B] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleDefinition {
    /// Value must parse as a signed 64-bit integer
    Int {
        /// Accept the empty string
        #[serde(default)]
        empty_ok: bool,
    },

    /// Value must parse as a 64-bit float
    Float {
        /// Accept the empty string
        #[serde(default)]
        empty_ok: bool,
    },

    /// Value must be one of a fixed set
    Set {
        /// Accepted values
        values: Vec<String>,
        /// Accept the empty string
        #[serde(default)]
        empty_ok: bool,
    },

    /// Value, combined with the listed sibling columns, must not repeat
    Unique {
        /// Sibling columns forming a composite key with this one
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        unique_with: Vec<String>,
        /// Accept (and do not track) the empty string
        #[serde(default)]
        empty_ok: bool,
    },

    /// Value must match a regular expression
    Regex {
        /// Regular expression
        pattern: String,
        /// Require the whole value to match instead of a prefix
        #[serde(default)]
        full: bool,
        /// Accept the empty string
        #[serde(default)]
        empty_ok: bool,
    },

    /// Value must be a number within inclusive bounds
    Range {
        /// Minimum value (inclusive)
        low: f64,
        /// Maximum value (inclusive)
        high: f64,
        /// Accept the empty string
        #[serde(default)]
        empty_ok: bool,
    },

    /// Value must be the empty string
    Empty,

    /// Value must not be the empty string
    NotEmpty,

    /// Any value is accepted
    Ignore,
}

impl RuleDefinition {
    /// Integer rule rejecting empty values.
    pub fn int() -> Self {
        RuleDefinition::Int { empty_ok: false }
    }

    /// Float rule rejecting empty values.
    pub fn float() -> Self {
        RuleDefinition::Float { empty_ok: false }
    }

    /// Set rule rejecting empty values.
    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleDefinition::Set {
            values: values.into_iter().map(Into::into).collect(),
            empty_ok: false,
        }
    }

    /// Single-column uniqueness rule.
    pub fn unique() -> Self {
        RuleDefinition::Unique {
            unique_with: Vec::new(),
            empty_ok: false,
        }
    }

    /// Prefix-matching regex rule rejecting empty values.
    pub fn regex(pattern: impl Into<String>) -> Self {
        RuleDefinition::Regex {
            pattern: pattern.into(),
            full: false,
            empty_ok: false,
        }
    }

    /// Inclusive range rule rejecting empty values.
    pub fn range(low: f64, high: f64) -> Self {
        RuleDefinition::Range {
            low,
            high,
            empty_ok: false,
        }
    }

    /// Returns the validator name this rule compiles to.
    pub fn validator_name(&self) -> &'static str {
        match self {
            RuleDefinition::Int { .. } => "IntValidator",
            RuleDefinition::Float { .. } => "FloatValidator",
            RuleDefinition::Set { .. } => "SetValidator",
            RuleDefinition::Unique { .. } => "UniqueValidator",
            RuleDefinition::Regex { .. } => "RegexValidator",
            RuleDefinition::Range { .. } => "RangeValidator",
            RuleDefinition::Empty => "EmptyValidator",
            RuleDefinition::NotEmpty => "NotEmptyValidator",
            RuleDefinition::Ignore => "Ignore",
        }
    }
}
