use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tabval_core::SchemaDefinitionBuilder;
use tabval_parser::{SchemaFormat, to_string};
use tabval_validator::{CsvFile, Source, delimiter_byte};
use tracing::info;

use crate::output;

pub fn execute(
    data_path: &str,
    output_path: Option<&str>,
    name: Option<String>,
    delimiter: char,
) -> Result<()> {
    info!("Initializing schema from data file: {}", data_path);

    let source = CsvFile::new(data_path)
        .with_delimiter(delimiter_byte(delimiter).context("Invalid delimiter")?);
    let table = source
        .open()
        .with_context(|| format!("Failed to read {}", data_path))?;

    if table.header.is_empty() {
        bail!("{} has no field names", data_path);
    }

    let name = name.unwrap_or_else(|| {
        Path::new(data_path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("schema")
            .to_string()
    });

    let mut builder = SchemaDefinitionBuilder::new(name)
        .description(format!("Generated from the header of {}", data_path));
    if delimiter != ',' {
        builder = builder.delimiter(delimiter);
    }
    for column in &table.header {
        builder = builder.empty_column(column);
    }
    let definition = builder.build();

    let yaml = to_string(&definition, SchemaFormat::Yaml)
        .context("Failed to serialize schema to YAML")?;

    if let Some(path) = output_path {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))?;
        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write to file: {}", path))?;
        output::print_success(&format!(
            "Schema with {} columns written to: {}",
            table.header.len(),
            path
        ));
    } else {
        print!("{}", yaml);
    }

    Ok(())
}
