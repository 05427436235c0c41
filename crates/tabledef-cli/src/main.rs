//! tabledef CLI - validate table/schema specs and compile PostgreSQL DDL.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tabledef::{compile, validate, DdlError, DropBehavior, SchemaSpec, TableSpec, Verdict};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "tabledef")]
#[command(about = "Validate table/schema specs and compile PostgreSQL DDL")]
#[command(version)]
struct Cli {
    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "warn")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a spec file and report every problem at once
    Validate {
        /// Path to the spec file (.yaml, .yml, or .json)
        spec: PathBuf,

        /// What the spec describes
        #[arg(long, value_enum, default_value = "table")]
        kind: SpecKind,

        /// Print the verdict as JSON
        #[arg(long)]
        output_json: bool,
    },

    /// Validate a spec file and print its CREATE statements
    Generate {
        /// Path to the spec file (.yaml, .yml, or .json)
        spec: PathBuf,

        /// What the spec describes
        #[arg(long, value_enum, default_value = "table")]
        kind: SpecKind,
    },

    /// Validate a spec file and print its DROP statement
    Drop {
        /// Path to the spec file (.yaml, .yml, or .json)
        spec: PathBuf,

        /// What the spec describes
        #[arg(long, value_enum, default_value = "table")]
        kind: SpecKind,

        /// Drop dependent objects too (default: RESTRICT)
        #[arg(long)]
        cascade: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SpecKind {
    Table,
    Schema,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, DdlError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(DdlError::Spec)?;

    match cli.command {
        Commands::Validate {
            spec,
            kind,
            output_json,
        } => {
            let verdict = load_and_validate(&spec, kind)?;

            if output_json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else if verdict.valid {
                println!("Spec is valid.");
            } else {
                println!("Spec is invalid:");
                for error in &verdict.errors {
                    println!("  - {}", error);
                }
            }

            // Validation failure is a reported outcome, not a crash; the
            // exit code still distinguishes it for scripting callers.
            if verdict.valid {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(2))
            }
        }

        Commands::Generate { spec, kind } => {
            match kind {
                SpecKind::Table => {
                    let table = load_table(&spec)?;
                    for statement in compile::create_table_script(&table) {
                        println!("{}", statement);
                    }
                }
                SpecKind::Schema => {
                    let schema = load_schema(&spec)?;
                    println!("{}", compile::create_schema(&schema));
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Drop {
            spec,
            kind,
            cascade,
        } => {
            let behavior = if cascade {
                DropBehavior::Cascade
            } else {
                DropBehavior::Restrict
            };

            match kind {
                SpecKind::Table => {
                    let table = load_table(&spec)?;
                    println!(
                        "{}",
                        compile::drop_table(&table.schema, &table.name, behavior)
                    );
                }
                SpecKind::Schema => {
                    let schema = load_schema(&spec)?;
                    println!("{}", compile::drop_schema(&schema.name, behavior));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load a spec and produce its verdict without enforcing validity.
fn load_and_validate(path: &PathBuf, kind: SpecKind) -> Result<Verdict, DdlError> {
    match kind {
        SpecKind::Table => {
            let table = TableSpec::load(path)?;
            info!("loaded table spec for {} from {:?}", table.full_name(), path);
            Ok(validate::validate_table(&table))
        }
        SpecKind::Schema => {
            let schema = SchemaSpec::load(path)?;
            info!("loaded schema spec for {} from {:?}", schema.name, path);
            Ok(validate::validate_schema(&schema))
        }
    }
}

/// Load a table spec and refuse to compile it unless it validates.
fn load_table(path: &PathBuf) -> Result<TableSpec, DdlError> {
    let table = TableSpec::load(path)?;
    let verdict = validate::validate_table(&table);
    if !verdict.valid {
        return Err(DdlError::validation(&verdict.errors));
    }
    Ok(table)
}

/// Load a schema spec and refuse to compile it unless it validates.
fn load_schema(path: &PathBuf) -> Result<SchemaSpec, DdlError> {
    let schema = SchemaSpec::load(path)?;
    let verdict = validate::validate_schema(&schema);
    if !verdict.valid {
        return Err(DdlError::validation(&verdict.errors));
    }
    Ok(schema)
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
