//! Runnable schemas.
//!
//! A [`Schema`] maps each declared column to the live validators that run on
//! it, in declaration order. It is built in code or compiled from a
//! [`SchemaDefinition`].

use crate::validators::{EmptyValidator, build_validator};
use indexmap::IndexMap;
use tabval_core::{ConfigError, RuleDefinition, SchemaDefinition, Validator};

type DefaultFactory = Box<dyn Fn() -> Result<Box<dyn Validator>, ConfigError> + Send + Sync>;

/// Column name to ordered validators.
///
/// A column declared with no validators is bound to one default validator
/// (an [`EmptyValidator`] unless changed with [`Schema::with_default`]) when
/// the schema is bound to a source.
///
/// # Example
///
/// ```rust
/// use tabval_validator::{Schema, SetValidator, UniqueValidator};
///
/// let schema = Schema::new()
///     .rule("Column A", UniqueValidator::new())
///     .rule("Column B", SetValidator::new(["Vampire", "Not A Vampire"]))
///     .column("Notes", vec![]);
///
/// assert_eq!(schema.column_names().collect::<Vec<_>>(), vec!["Column A", "Column B", "Notes"]);
/// ```
pub struct Schema {
    columns: IndexMap<String, Vec<Box<dyn Validator>>>,
    default_validator: DefaultFactory,
}

impl Schema {
    /// Creates an empty schema whose default validator is `EmptyValidator`.
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
            default_validator: Box::new(|| Ok(Box::new(EmptyValidator))),
        }
    }

    /// Compiles a schema definition into live validators.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised by a malformed rule, including
    /// the default rule.
    pub fn from_definition(definition: &SchemaDefinition) -> Result<Self, ConfigError> {
        let mut schema = Self::new();

        if let Some(rule) = &definition.default_rule {
            // Surface a malformed default rule now rather than at binding.
            build_validator(rule)?;
            let rule: RuleDefinition = rule.clone();
            schema.default_validator = Box::new(move || build_validator(&rule));
        }

        for (column, rules) in &definition.columns {
            let validators = rules
                .iter()
                .map(build_validator)
                .collect::<Result<Vec<_>, _>>()?;
            schema.columns.insert(column.clone(), validators);
        }

        Ok(schema)
    }

    /// Declares a column with its validators, replacing any earlier
    /// declaration of the same column.
    pub fn column(mut self, name: impl Into<String>, validators: Vec<Box<dyn Validator>>) -> Self {
        self.add_column(name, validators);
        self
    }

    /// Appends one validator to a column, declaring the column if needed.
    pub fn rule(mut self, column: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.columns
            .entry(column.into())
            .or_default()
            .push(Box::new(validator));
        self
    }

    /// Sets the validator factory used for columns declared without
    /// validators.
    pub fn with_default<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Validator> + Send + Sync + 'static,
    {
        self.default_validator = Box::new(move || Ok(factory()));
        self
    }

    /// Declares a column with its validators in place.
    pub fn add_column(&mut self, name: impl Into<String>, validators: Vec<Box<dyn Validator>>) {
        self.columns.insert(name.into(), validators);
    }

    /// Returns the number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no column is declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if `column` is declared.
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Declared column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Validators declared for `column`.
    pub fn validators(&self, column: &str) -> Option<&[Box<dyn Validator>]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    /// Columns and validators in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Box<dyn Validator>])> {
        self.columns
            .iter()
            .map(|(column, validators)| (column.as_str(), validators.as_slice()))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Vec<Box<dyn Validator>>)> {
        self.columns
            .iter_mut()
            .map(|(column, validators)| (column.as_str(), validators))
    }

    /// Gives every column without validators one default validator.
    ///
    /// Returns the names of the columns that were filled.
    pub(crate) fn apply_defaults(&mut self) -> Result<Vec<String>, ConfigError> {
        let mut filled = Vec::new();
        for (column, validators) in self.columns.iter_mut() {
            if validators.is_empty() {
                validators.push((self.default_validator)()?);
                filled.push(column.clone());
            }
        }
        Ok(filled)
    }

    /// Discards the per-run state of every validator.
    pub(crate) fn reset(&mut self) {
        for validators in self.columns.values_mut() {
            for validator in validators.iter_mut() {
                validator.reset();
            }
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.columns.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{Ignore, IntValidator};
    use tabval_core::SchemaDefinitionBuilder;

    #[test]
    fn test_builder_keeps_declaration_order() {
        let schema = Schema::new()
            .rule("b", IntValidator::new())
            .column("a", vec![])
            .rule("b", Ignore);

        assert_eq!(schema.column_names().collect::<Vec<_>>(), vec!["b", "a"]);
        let names: Vec<&str> = schema
            .validators("b")
            .unwrap()
            .iter()
            .map(|v| v.name())
            .collect();
        assert_eq!(names, vec!["IntValidator", "Ignore"]);
        assert!(schema.contains("a"));
        assert!(!schema.contains("c"));
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_apply_defaults_fills_only_empty_columns() {
        let mut schema = Schema::new()
            .column("blank", vec![])
            .rule("id", IntValidator::new());

        let filled = schema.apply_defaults().unwrap();
        assert_eq!(filled, vec!["blank".to_string()]);
        assert_eq!(schema.validators("blank").unwrap()[0].name(), "EmptyValidator");
        assert_eq!(schema.validators("id").unwrap().len(), 1);

        // Idempotent once filled
        assert!(schema.apply_defaults().unwrap().is_empty());
    }

    #[test]
    fn test_custom_default() {
        let mut schema = Schema::new()
            .with_default(|| Box::new(Ignore))
            .column("anything", vec![]);

        schema.apply_defaults().unwrap();
        assert_eq!(schema.validators("anything").unwrap()[0].name(), "Ignore");
    }

    #[test]
    fn test_from_definition() {
        let definition = SchemaDefinitionBuilder::new("t")
            .column("id", vec![RuleDefinition::int(), RuleDefinition::unique()])
            .empty_column("note")
            .default_rule(RuleDefinition::NotEmpty)
            .build();

        let mut schema = Schema::from_definition(&definition).unwrap();
        assert_eq!(schema.column_names().collect::<Vec<_>>(), vec!["id", "note"]);
        assert_eq!(schema.validators("id").unwrap().len(), 2);

        schema.apply_defaults().unwrap();
        assert_eq!(
            schema.validators("note").unwrap()[0].name(),
            "NotEmptyValidator"
        );
    }

    #[test]
    fn test_from_definition_rejects_bad_rules() {
        let definition = SchemaDefinitionBuilder::new("t")
            .column("code", vec![RuleDefinition::regex("(")])
            .build();
        assert!(Schema::from_definition(&definition).is_err());

        let definition = SchemaDefinitionBuilder::new("t")
            .default_rule(RuleDefinition::range(1.0, 0.0))
            .build();
        assert!(Schema::from_definition(&definition).is_err());
    }

    #[test]
    fn test_debug_lists_descriptions() {
        let schema = Schema::new().rule("id", IntValidator::new());
        assert_eq!(format!("{:?}", schema), r#"{"id": [IntValidator]}"#);
    }
}
