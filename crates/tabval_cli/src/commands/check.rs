use anyhow::{Context, Result};
use std::path::Path;
use tabval_parser::parse_file;
use tabval_validator::Schema;
use tracing::info;

use crate::output;

pub fn execute(schema_path: &str) -> Result<()> {
    info!("Checking schema: {}", schema_path);

    let definition = parse_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;

    // Compiling surfaces bad patterns, bounds and empty sets
    let schema = Schema::from_definition(&definition)
        .with_context(|| format!("Invalid schema: {}", definition.name))?;

    output::print_success("Schema is valid");

    println!("\nSchema Summary:");
    println!("  Name:        {}", definition.name);
    println!(
        "  Description: {}",
        definition.description.as_deref().unwrap_or("N/A")
    );
    println!(
        "  Delimiter:   {:?}",
        definition.delimiter.unwrap_or(',')
    );
    if let Some(rule) = &definition.default_rule {
        println!("  Default:     {}", rule.validator_name());
    }
    println!("  Columns:     {}", schema.len());
    println!("  Rules:       {}", definition.rule_count());

    println!("\nColumns:");
    for (column, validators) in schema.iter() {
        if validators.is_empty() {
            println!("  {}: (default)", column);
        } else {
            let described: Vec<String> = validators.iter().map(|v| v.describe()).collect();
            println!("  {}: {}", column, described.join(", "));
        }
    }

    Ok(())
}
