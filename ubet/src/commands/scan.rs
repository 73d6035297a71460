//! Scan command implementation.
//!
//! Tokenizes an input file and renders the token table (or the same
//! records as JSON) to stdout. The table mirrors the classic four-column
//! listing: index, lexeme, resolved token name, line. Rows holding the
//! terminal `LEXICAL_ERROR` token are flagged with a leading `!`.

use std::path::PathBuf;

use tracing::{debug, warn};
use ubec_lex::{scan, Dialect};

use crate::commands::common::{escape_lexeme, read_source, records, TokenRecord};
use crate::error::Result;

/// Output format of the scan command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFormat {
    /// Aligned plain-text table.
    Table,
    /// Pretty-printed JSON records.
    Json,
}

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input file (`-` for stdin).
    pub file: PathBuf,
    /// Output format.
    pub format: ScanFormat,
}

/// Execute the scan command.
///
/// # Arguments
/// * `args` - The scan arguments
/// * `dialect` - The dialect tables to scan with
///
/// # Returns
/// * `Result<()>` - Success or an error
pub fn run_scan(args: ScanArgs, dialect: &Dialect) -> Result<()> {
    let source = read_source(&args.file)?;
    let tokens = scan(&source, dialect);
    debug!(
        "scanned {} tokens from {} bytes ({} dialect)",
        tokens.len(),
        source.len(),
        dialect.version()
    );

    let rows = records(&tokens, dialect);
    if rows.iter().any(|r| r.is_error) {
        warn!("input ends in a lexical error; scanning stopped early");
    }

    match args.format {
        ScanFormat::Table => print!("{}", render_table(&rows)),
        ScanFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    if args.verbose {
        eprintln!("{} token(s)", rows.len());
    }

    Ok(())
}

/// Renders the aligned token table.
///
/// Column widths are computed from the data; lexemes are escaped so
/// multi-line lexemes occupy a single row.
fn render_table(rows: &[TokenRecord]) -> String {
    let header = ["#", "Lexeme", "Token", "Line"];

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.index.to_string(),
                escape_lexeme(&r.lexeme),
                r.token.clone(),
                r.line.to_string(),
            ]
        })
        .collect();

    let mut widths = [header[0].len(), header[1].len(), header[2].len(), header[3].len()];
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&header.map(String::from), &widths, false));
    out.push_str(&separator(&widths));
    for (row, record) in cells.iter().zip(rows) {
        out.push_str(&format_row(row, &widths, record.is_error));
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4], flag: bool) -> String {
    let marker = if flag { '!' } else { ' ' };
    format!(
        "{} {:>iw$} | {:<lw$} | {:<tw$} | {:>nw$}\n",
        marker,
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        iw = widths[0],
        lw = widths[1],
        tw = widths[2],
        nw = widths[3],
    )
}

fn separator(widths: &[usize; 4]) -> String {
    format!(
        "{}-+-{}-+-{}-+-{}\n",
        "-".repeat(widths[0] + 2),
        "-".repeat(widths[1]),
        "-".repeat(widths[2]),
        "-".repeat(widths[3]),
    )
}
