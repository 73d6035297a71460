//! Export command implementation.
//!
//! Tokenizes an input file and writes the token records as CSV. Every
//! cell is quoted; embedded quotes are doubled so lexemes containing `"`
//! survive a round trip through spreadsheet tools.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use ubec_lex::{scan, Dialect};

use crate::commands::common::{read_source, records, TokenRecord};
use crate::config::ExportConfig;
use crate::error::{Result, UbetError};

/// Arguments for the export command.
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input file (`-` for stdin).
    pub file: PathBuf,
    /// Output path; defaults to the input file name with a `.csv`
    /// extension (or `ube_tokens.csv` when reading stdin).
    pub output: Option<PathBuf>,
    /// Overwrite an existing output file.
    pub force: bool,
}

/// Execute the export command.
///
/// # Arguments
/// * `args` - The export arguments
/// * `dialect` - The dialect tables to scan with
/// * `config` - Export options from the configuration file
///
/// # Returns
/// * `Result<()>` - Success or an error
pub fn run_export(args: ExportArgs, dialect: &Dialect, config: &ExportConfig) -> Result<()> {
    let source = read_source(&args.file)?;
    let tokens = scan(&source, dialect);
    debug!("scanned {} tokens for export", tokens.len());

    let rows = records(&tokens, dialect);
    if rows.iter().any(|r| r.is_error) {
        warn!("input ends in a lexical error; the error row is exported as data");
    }

    let output = output_path(&args);
    if output.exists() && !args.force {
        return Err(UbetError::Validation(format!(
            "output file already exists: {} (use --force to overwrite)",
            output.display()
        )));
    }

    let csv = render_csv(&rows, config.include_header);
    std::fs::write(&output, csv)?;

    if args.verbose {
        eprintln!("wrote {} record(s) to {}", rows.len(), output.display());
    }

    Ok(())
}

/// Determines the output path for the CSV file.
fn output_path(args: &ExportArgs) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }
    if args.file == Path::new("-") {
        return PathBuf::from("ube_tokens.csv");
    }
    args.file.with_extension("csv")
}

/// Renders token records as CSV text.
fn render_csv(rows: &[TokenRecord], include_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    if include_header {
        lines.push(csv_row(&["#", "Lexeme", "Token", "Line"]));
    }

    for row in rows {
        lines.push(csv_row(&[
            &row.index.to_string(),
            &row.lexeme,
            &row.token,
            &row.line.to_string(),
        ]));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Quotes one CSV row: every cell wrapped in quotes, embedded quotes
/// doubled.
fn csv_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
