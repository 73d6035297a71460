//! Dialect command implementation.
//!
//! Prints the selected dialect's tables (keywords, reserved words,
//! operators with their semantic names, punctuation, and the word-start
//! policy) so the configuration the scanner runs with can be inspected
//! without reading source code.

use ubec_lex::Dialect;

use crate::error::Result;

/// Execute the dialect command.
///
/// # Arguments
/// * `dialect` - The dialect tables to print
///
/// # Returns
/// * `Result<()>` - Success or an error
pub fn run_dialect(dialect: &Dialect) -> Result<()> {
    print!("{}", describe(dialect));
    Ok(())
}

/// Renders a human-readable description of the dialect tables.
fn describe(dialect: &Dialect) -> String {
    let mut out = String::new();

    out.push_str(&format!("dialect: {}\n", dialect.version()));
    out.push_str(&format!(
        "underscore starts a word: {}\n",
        if dialect.underscore_starts_word() { "yes" } else { "no" }
    ));

    out.push_str("\nkeywords:\n");
    for word in dialect.keywords() {
        out.push_str(&format!("  {word}\n"));
    }

    out.push_str("\nreserved words:\n");
    for word in dialect.reserved_words() {
        out.push_str(&format!("  {word}\n"));
    }

    out.push_str("\nmulti-character operators:\n");
    for op in dialect.multi_char_operators() {
        out.push_str(&format!("  {:<4} {}\n", op, name_of(dialect, op)));
    }

    out.push_str("\nsingle-character operators:\n");
    for op in dialect.single_char_operators() {
        let op = op.to_string();
        out.push_str(&format!("  {:<4} {}\n", op, name_of(dialect, &op)));
    }

    out.push_str("\npunctuation:\n");
    for mark in dialect.punctuation() {
        let mark = mark.to_string();
        out.push_str(&format!("  {:<4} {}\n", mark, name_of(dialect, &mark)));
    }

    out
}

fn name_of(dialect: &Dialect, symbol: &str) -> &'static str {
    dialect.symbol_name(symbol).unwrap_or("(unnamed)")
}
