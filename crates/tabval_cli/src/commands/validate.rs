use anyhow::{Context, Result};
use std::path::Path;
use tabval_core::ValidationContext;
use tabval_parser::parse_file;
use tabval_validator::{CsvFile, DataValidator, Schema, delimiter_byte};
use tracing::info;

use crate::output::{self, OutputFormat};

pub fn execute(
    schema_path: &str,
    data_paths: &[String],
    delimiter: Option<char>,
    ignore_missing_validators: bool,
    sample_size: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    info!("Validating against schema: {}", schema_path);
    if let Some(size) = sample_size {
        info!("Sample size: {}", size);
    }

    let definition = parse_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;
    let schema = Schema::from_definition(&definition)
        .with_context(|| format!("Invalid schema: {}", definition.name))?;

    if format == OutputFormat::Text {
        output::print_info(&format!(
            "Schema loaded: {} ({} columns)",
            definition.name,
            definition.columns.len()
        ));
    }

    let delimiter = delimiter.or(definition.delimiter).unwrap_or(',');
    let delimiter = delimiter_byte(delimiter).context("Invalid delimiter")?;

    let context = ValidationContext {
        ignore_missing_validators,
        sample_size,
    };
    let mut validator = DataValidator::new(schema).with_context(context);

    let mut json_runs = Vec::with_capacity(data_paths.len());
    let mut all_passed = true;

    for data_path in data_paths {
        let source = CsvFile::new(data_path).with_delimiter(delimiter);
        let result = validator
            .validate(&source)
            .with_context(|| format!("Failed to validate {}", data_path));

        match result {
            Ok(report) => {
                all_passed &= report.passed();
                match format {
                    OutputFormat::Text => output::print_text_report(&report),
                    OutputFormat::Json => json_runs.push(output::json_report(&report)),
                }
            }
            Err(e) => {
                all_passed = false;
                output::print_error(&format!("{:#}", e));
                if format == OutputFormat::Json {
                    json_runs.push(output::json_error(data_path, &e));
                }
            }
        }
    }

    if format == OutputFormat::Json {
        output::print_json_runs(&json_runs);
    }

    if !all_passed {
        std::process::exit(1);
    }

    Ok(())
}
