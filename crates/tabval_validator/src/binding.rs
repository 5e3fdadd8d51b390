//! Binding a schema to a source header.
//!
//! Binding runs once per validation, after the header is read and before any
//! row. It compares the header against the declared columns, fills columns
//! declared without validators, and checks that every sibling column a
//! validator reads exists.

use crate::Schema;
use std::collections::HashSet;
use tabval_core::{ConfigError, SchemaMismatch, ValidationContext};
use tracing::{debug, warn};

/// Result of binding a schema to a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Every declared column is present; rows can be validated.
    ///
    /// `skipped` lists undeclared header columns that were tolerated because
    /// missing validators are ignored.
    Bound { skipped: Vec<String> },

    /// Header and declarations disagree; no row may be read
    Mismatch(SchemaMismatch),
}

/// Binds `schema` to `header`.
///
/// # Errors
///
/// Returns `ConfigError::MissingHeader` for an empty header,
/// `ConfigError::DuplicateColumn` when a header names a column twice, and
/// `ConfigError::UnknownDependency` when a validator reads a sibling column
/// the header lacks.
pub fn bind(
    schema: &mut Schema,
    header: &[String],
    context: &ValidationContext,
) -> Result<Binding, ConfigError> {
    if header.is_empty() {
        return Err(ConfigError::MissingHeader);
    }

    let mut seen = HashSet::with_capacity(header.len());
    for column in header {
        if !seen.insert(column.as_str()) {
            return Err(ConfigError::DuplicateColumn(column.clone()));
        }
    }

    let missing: Vec<String> = header
        .iter()
        .filter(|column| !schema.contains(column))
        .cloned()
        .collect();
    let unused: Vec<String> = schema
        .column_names()
        .filter(|column| !seen.contains(column))
        .map(String::from)
        .collect();

    if !unused.is_empty() || (!missing.is_empty() && !context.ignore_missing_validators) {
        return Ok(Binding::Mismatch(SchemaMismatch { missing, unused }));
    }

    for column in &missing {
        warn!("No validators declared for column '{}', skipping", column);
    }

    for column in schema.apply_defaults()? {
        debug!("Column '{}' bound to the default validator", column);
    }

    for (column, validators) in schema.iter() {
        for validator in validators {
            if let Some(dependency) = validator
                .dependencies()
                .iter()
                .find(|dependency| !seen.contains(dependency.as_str()))
            {
                return Err(ConfigError::unknown_dependency(
                    validator.name(),
                    column,
                    dependency,
                ));
            }
        }
    }

    Ok(Binding::Bound { skipped: missing })
}
