//! Error types for schema configuration.
//!
//! Data that fails a rule is never an error; these types cover the cases
//! where the schema itself, or its relation to a source header, cannot be
//! used to run a validation at all.

use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors detected before any row is validated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A rule was declared with parameters it cannot work with
    #[error("Invalid parameters for {validator}: {message}")]
    InvalidParameter {
        /// Rule name (e.g. "RegexValidator")
        validator: String,
        /// What is wrong with the parameters
        message: String,
    },

    /// The source header names the same column twice
    #[error("Duplicate column in source header: '{0}'")]
    DuplicateColumn(String),

    /// The source has no header row
    #[error("Source has no field names")]
    MissingHeader,

    /// A validator reads a sibling column the source does not provide
    #[error("{validator} on column '{column}' depends on column '{dependency}', which is not in the source header")]
    UnknownDependency {
        /// Rule name
        validator: String,
        /// Column the validator is bound to
        column: String,
        /// Sibling column that is missing
        dependency: String,
    },
}

impl ConfigError {
    /// Creates a new invalid parameter error.
    pub fn invalid_parameter(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            validator: validator.into(),
            message: message.into(),
        }
    }

    /// Creates a new unknown dependency error.
    pub fn unknown_dependency(
        validator: impl Into<String>,
        column: impl Into<String>,
        dependency: impl Into<String>,
    ) -> Self {
        Self::UnknownDependency {
            validator: validator.into(),
            column: column.into(),
            dependency: dependency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::invalid_parameter("RangeValidator", "low is greater than high");
        assert_eq!(
            err.to_string(),
            "Invalid parameters for RangeValidator: low is greater than high"
        );

        let err = ConfigError::unknown_dependency("UniqueValidator", "id", "region");
        assert!(err.to_string().contains("'region'"));

        assert_eq!(
            ConfigError::MissingHeader.to_string(),
            "Source has no field names"
        );
    }
}
