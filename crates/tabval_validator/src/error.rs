//! Error types for validation runs.

use tabval_core::ConfigError;
use thiserror::Error;

/// Errors that stop a validation run.
///
/// Rejected field values are not errors; they end up in the report. These
/// variants cover an unusable schema and failures of the source itself.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Schema or header configuration problem
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The source could not be parsed as delimited text
    #[error("Failed to read {source_name}: {error}")]
    Csv {
        source_name: String,
        #[source]
        error: csv::Error,
    },

    /// The source could not be opened or read
    #[error("Failed to open {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// A row does not have one value per header column
    #[error("Row {row} of {source_name} has {found} fields, expected {expected}")]
    RowLength {
        source_name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    /// Creates a new CSV read error.
    pub fn csv(source_name: impl Into<String>, error: csv::Error) -> Self {
        Self::Csv {
            source_name: source_name.into(),
            error,
        }
    }

    /// Creates a new I/O error.
    pub fn io(source_name: impl Into<String>, error: std::io::Error) -> Self {
        Self::Io {
            source_name: source_name.into(),
            error,
        }
    }

    /// Creates a new row length error.
    pub fn row_length(
        source_name: impl Into<String>,
        row: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::RowLength {
            source_name: source_name.into(),
            row,
            expected,
            found,
        }
    }
}
