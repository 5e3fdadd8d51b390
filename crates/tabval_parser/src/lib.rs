//! Parser for tabval schema files (YAML/TOML formats).
//!
//! This module reads schema definitions from YAML and TOML files into the
//! strongly-typed `SchemaDefinition` structure, and writes them back out.
//!
//! # Example
//!
//! ```rust
//! use tabval_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: vampires
//! description: Famous vampires and their status
//! columns:
//!   Column A:
//!     - type: unique
//!   Column B:
//!     - type: set
//!       values: [Vampire, Not A Vampire]
//!   Notes: []
//! "#;
//!
//! let definition = parse_yaml(yaml).expect("Failed to parse schema");
//! assert_eq!(definition.name, "vampires");
//! assert_eq!(definition.column_names(), vec!["Column A", "Column B", "Notes"]);
//! ```

use std::path::Path;
use tabval_core::SchemaDefinition;
use thiserror::Error;

/// Errors that can occur while reading or writing schema files.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// Serializing a definition failed
    #[error("Failed to serialize schema: {0}")]
    SerializeError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported schema file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a schema definition from a YAML string.
pub fn parse_yaml(content: &str) -> Result<SchemaDefinition> {
    let definition: SchemaDefinition = serde_yaml_ng::from_str(content)?;
    Ok(definition)
}

/// Parse a schema definition from a TOML string.
///
/// # Example
///
/// ```rust
/// use tabval_parser::parse_toml;
///
/// let toml = r#"
/// name = "scores"
/// delimiter = ";"
///
/// [columns]
/// id = [{ type = "int" }, { type = "unique" }]
/// score = [{ type = "range", low = 0.0, high = 100.0 }]
/// "#;
///
/// let definition = parse_toml(toml).unwrap();
/// assert_eq!(definition.delimiter, Some(';'));
/// assert_eq!(definition.rule_count(), 3);
/// ```
pub fn parse_toml(content: &str) -> Result<SchemaDefinition> {
    let definition: SchemaDefinition =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(definition)
}

/// Detect the schema format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `SchemaFormat::Yaml`
/// * `.toml` → `SchemaFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SchemaFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(SchemaFormat::Yaml),
        "toml" => Ok(SchemaFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a schema definition from a file, choosing the format by extension.
///
/// ```no_run
/// use tabval_parser::parse_file;
/// use std::path::Path;
///
/// let definition = parse_file(Path::new("schemas/vampires.yml")).unwrap();
/// println!("{} declares {} columns", definition.name, definition.columns.len());
/// ```
pub fn parse_file(path: &Path) -> Result<SchemaDefinition> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        SchemaFormat::Yaml => parse_yaml(&content),
        SchemaFormat::Toml => parse_toml(&content),
    }
}

/// Serialize a schema definition in the given format.
pub fn to_string(definition: &SchemaDefinition, format: SchemaFormat) -> Result<String> {
    match format {
        SchemaFormat::Yaml => serde_yaml_ng::to_string(definition)
            .map_err(|e| ParserError::SerializeError(e.to_string())),
        SchemaFormat::Toml => toml::to_string_pretty(definition)
            .map_err(|e| ParserError::SerializeError(e.to_string())),
    }
}
