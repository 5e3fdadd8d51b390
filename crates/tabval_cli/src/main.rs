mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "tabval")]
#[command(version, about = "Tabular data validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (shows every rejected value)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate data files against a schema
    Validate {
        /// Path to the schema file (YAML or TOML)
        schema: String,

        /// Data files to validate
        #[arg(required = true)]
        data: Vec<String>,

        /// Field delimiter (overrides the schema's delimiter)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Skip undeclared columns instead of failing
        #[arg(short, long)]
        ignore_missing_validators: bool,

        /// Only validate the first N rows of each file
        #[arg(short, long)]
        sample_size: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check a schema file without validating data
    Check {
        /// Path to the schema file (YAML or TOML)
        schema: String,
    },

    /// Generate a schema skeleton from the header of a data file
    Init {
        /// Data file to read the header from
        data: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Schema name (defaults to the data file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Field delimiter of the data file
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            schema,
            data,
            delimiter,
            ignore_missing_validators,
            sample_size,
            format,
        } => commands::validate::execute(
            &schema,
            &data,
            delimiter,
            ignore_missing_validators,
            sample_size,
            format,
        ),

        Commands::Check { schema } => commands::check::execute(&schema),

        Commands::Init {
            data,
            output,
            name,
            delimiter,
        } => commands::init::execute(&data, output.as_deref(), name, delimiter),
    }
}
