//! Ubet CLI - The token-table tool for the UBE teaching language.
//!
//! This is the main entry point for the ubet CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::resolve_dialect;
use commands::dialect::run_dialect;
use commands::export::{run_export, ExportArgs};
use commands::scan::{run_scan, ScanArgs, ScanFormat};
use config::Config;
use error::{Result, UbetError};

/// Ubet - token listings for UBE source files
///
/// Ubet tokenizes UBE source text and presents the result as an aligned
/// table, JSON records, or a CSV export, without ever altering the token
/// sequence the scanner produced.
#[derive(Parser, Debug)]
#[command(name = "ubet")]
#[command(author = "UBE Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token listings for UBE source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "UBET_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "UBET_CONFIG")]
    config: Option<PathBuf>,

    /// Dialect to scan with (classic or extended)
    #[arg(short, long, global = true, env = "UBET_DIALECT")]
    dialect: Option<String>,

    /// Disable color output
    #[arg(long, global = true, env = "UBET_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ubet CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a file and print the token table
    ///
    /// Reads the input file (or stdin for `-`), scans it, and renders
    /// the classic four-column listing. Rows holding a lexical error are
    /// flagged with `!`.
    Scan(ScanCommand),

    /// Tokenize a file and export the records as CSV
    ///
    /// Every cell is quoted and embedded quotes are doubled. The output
    /// path defaults to the input file name with a `.csv` extension.
    Export(ExportCommand),

    /// Print the active dialect's tables
    ///
    /// Lists keywords, reserved words, operators with their semantic
    /// names, punctuation, and the word-start policy.
    Dialect,
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Input file (use `-` for stdin)
    file: PathBuf,

    /// Output format (table or json)
    #[arg(short = 'F', long, default_value = "table")]
    format: String,
}

/// Arguments for the export subcommand.
#[derive(Parser, Debug)]
struct ExportCommand {
    /// Input file (use `-` for stdin)
    file: PathBuf,

    /// Output file (default: input name with .csv extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the ubet CLI.
///
/// Parses command-line arguments, initializes logging, loads
/// configuration, and dispatches to the appropriate command handler.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    execute_command(&cli, config).context("command failed")?;
    Ok(())
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| UbetError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(cli: &Cli, config: Config) -> Result<()> {
    let verbose = cli.verbose || config.verbose;
    let dialect = resolve_dialect(cli.dialect.as_deref(), &config)?;

    match &cli.command {
        Commands::Scan(args) => {
            let scan_args = ScanArgs {
                verbose,
                file: args.file.clone(),
                format: parse_scan_format(&args.format)?,
            };
            run_scan(scan_args, &dialect)
        }
        Commands::Export(args) => {
            let export_args = ExportArgs {
                verbose,
                file: args.file.clone(),
                output: args.output.clone(),
                force: args.force,
            };
            run_export(export_args, &dialect, &config.export)
        }
        Commands::Dialect => run_dialect(&dialect),
    }
}

/// Parse the scan output format name.
fn parse_scan_format(name: &str) -> Result<ScanFormat> {
    match name.to_ascii_lowercase().as_str() {
        "table" => Ok(ScanFormat::Table),
        "json" => Ok(ScanFormat::Json),
        other => Err(UbetError::Validation(format!(
            "unknown format `{other}` (expected `table` or `json`)"
        ))),
    }
}
