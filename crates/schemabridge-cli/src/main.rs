//! schemabridge CLI: inspect and validate declared job columns.

use clap::{Parser, Subcommand, ValueEnum};
use schemabridge_core::config::ConverterConfig;
use schemabridge_core::field::{parse_fields_json, parse_fields_yaml, FieldConf};
use schemabridge_core::schema::LogicalType;
use schemabridge_core::types::TypeInfo;
use schemabridge_table::{
    create_row_type_from_fields, data_type_with, type_information_with, RawTypeConverter,
    SqlTypeConverter,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemabridge")]
#[command(about = "Translate declared job columns into engine row types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the type information and row data type of a field list
    Describe {
        /// Path to the field list (YAML, or JSON by `.json` extension)
        #[arg(short, long)]
        fields: PathBuf,

        /// How declared types are resolved
        #[arg(long, value_enum, default_value_t = ConverterKind::Class)]
        converter: ConverterKind,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check every declared type against the SQL converter
    Validate {
        /// Path to the field list (YAML, or JSON by `.json` extension)
        #[arg(short, long)]
        fields: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ConverterKind {
    /// Reduce each type to its value class
    Class,
    /// Parse each type string with the SQL converter
    Sql,
}

#[derive(Debug, Serialize)]
struct Description {
    type_information: String,
    row_data_type: LogicalType,
    fingerprint: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Describe {
            fields,
            converter,
            json,
        } => {
            if let Err(e) = run_describe(&fields, converter, json) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { fields } => {
            match validate_fields_file(&fields) {
                Ok(count) => println!("✓ {} column(s) are valid", count),
                Err(e) => {
                    eprintln!("Validation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn run_describe(
    path: &Path,
    converter: ConverterKind,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fields = load_fields(path)?;
    let config = ConverterConfig::from_env();
    config.validate()?;
    let desc = describe(&fields, converter, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&desc)?);
        return Ok(());
    }

    println!("Columns:          {}", fields.len());
    println!("Type information: {}", desc.type_information);
    println!("Row data type:    {}", desc.row_data_type);
    if let Some(fp) = &desc.fingerprint {
        println!("Fingerprint:      {}", fp);
    }
    Ok(())
}

fn validate_fields_file(path: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let fields = load_fields(path)?;
    let config = ConverterConfig::from_env();
    config.validate()?;
    validate_fields(&fields, &config)?;
    Ok(fields.len())
}

fn load_fields(path: &Path) -> Result<Vec<FieldConf>, Box<dyn std::error::Error>> {
    let src = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = src.len(), "loaded field list");
    Ok(parse_field_source(path, &src)?)
}

fn parse_field_source(path: &Path, src: &str) -> schemabridge_core::Result<Vec<FieldConf>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_fields_json(src),
        _ => parse_fields_yaml(src),
    }
}

fn describe(
    fields: &[FieldConf],
    converter: ConverterKind,
    config: &ConverterConfig,
) -> schemabridge_core::Result<Description> {
    let (info, row_data_type) = match converter {
        ConverterKind::Class => (
            type_information_with(fields, config)?,
            data_type_with(fields, config)?,
        ),
        ConverterKind::Sql => {
            let conv = SqlTypeConverter::new(config.clone());
            let row_data_type = create_row_type_from_fields(fields, &conv)?;
            let info = match row_data_type.as_row() {
                Some(row) if !row.is_empty() => TypeInfo::Internal(row.clone()),
                _ => TypeInfo::Generic,
            };
            (info, row_data_type)
        }
    };

    let fingerprint = row_data_type
        .as_row()
        .map(|row| row.fingerprint())
        .transpose()?
        .map(|h| h.to_hex());

    Ok(Description {
        type_information: info.to_string(),
        row_data_type,
        fingerprint,
    })
}

/// Runs every column through the SQL converter and then the schema builder,
/// so duplicate names are reported too.
fn validate_fields(
    fields: &[FieldConf],
    config: &ConverterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let conv = SqlTypeConverter::new(config.clone());
    for field in fields {
        conv.apply(&field.field_type)
            .map_err(|e| format!("column '{}': {}", field.name, e))?;
    }
    create_row_type_from_fields(fields, &conv)?;
    Ok(())
}
