//! Builder pattern for creating schema definitions.
//!
//! This module provides an ergonomic builder for constructing schema
//! definitions with a fluent API.

use crate::{RuleDefinition, SchemaDefinition};
use indexmap::IndexMap;

/// Builder for creating a `SchemaDefinition`.
///
/// # Example
///
/// ```rust
/// use tabval_core::{RuleDefinition, SchemaDefinitionBuilder};
///
/// let definition = SchemaDefinitionBuilder::new("vampires")
///     .description("Known vampires")
///     .column("Name", vec![RuleDefinition::unique()])
///     .column("Status", vec![RuleDefinition::set(["Vampire", "Not A Vampire"])])
///     .empty_column("Notes")
///     .build();
///
/// assert_eq!(definition.columns.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct SchemaDefinitionBuilder {
    name: Option<String>,
    description: Option<String>,
    delimiter: Option<char>,
    default_rule: Option<RuleDefinition>,
    columns: IndexMap<String, Vec<RuleDefinition>>,
}

impl SchemaDefinitionBuilder {
    /// Creates a new builder for a schema with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets the schema description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the field delimiter of the data files.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the rule substituted for columns with an empty rule list.
    pub fn default_rule(mut self, rule: RuleDefinition) -> Self {
        self.default_rule = Some(rule);
        self
    }

    /// Declares a column with its rules.
    ///
    /// Declaring the same column twice replaces the earlier rules but keeps
    /// its original position.
    pub fn column(mut self, name: impl Into<String>, rules: Vec<RuleDefinition>) -> Self {
        self.columns.insert(name.into(), rules);
        self
    }

    /// Declares a column with an empty rule list.
    pub fn empty_column(self, name: impl Into<String>) -> Self {
        self.column(name, Vec::new())
    }

    /// Appends a rule to a column, declaring the column if needed.
    pub fn rule(mut self, column: impl Into<String>, rule: RuleDefinition) -> Self {
        self.columns.entry(column.into()).or_default().push(rule);
        self
    }

    /// Builds the schema definition.
    ///
    /// # Panics
    ///
    /// Panics if the name is not set.
    pub fn build(self) -> SchemaDefinition {
        SchemaDefinition {
            name: self.name.expect("name is required"),
            description: self.description,
            delimiter: self.delimiter,
            default_rule: self.default_rule,
            columns: self.columns,
        }
    }
}
