//! Common types and utilities for ubet commands.
//!
//! This module provides shared types and utility functions used across
//! the command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use ubec_lex::{Dialect, Token};

use crate::config::Config;
use crate::error::{Result, UbetError};

/// One row of presentation output.
///
/// The adapter reads the token sequence in order and exposes, per token,
/// its 1-based index, its exact lexeme, its resolved semantic name, and
/// its starting line. It never reorders or mutates the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Position of the token in the sequence (1-based).
    pub index: usize,
    /// The exact matched substring of the source.
    pub lexeme: String,
    /// Resolved semantic name (e.g. `plus_op`) or coarse kind name.
    pub token: String,
    /// Line on which the lexeme started (1-based).
    pub line: u32,
    /// True for the terminal `LEXICAL_ERROR` row.
    #[serde(skip)]
    pub is_error: bool,
}

/// Builds presentation records from a token sequence, in order.
pub fn records(tokens: &[Token<'_>], dialect: &Dialect) -> Vec<TokenRecord> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| TokenRecord {
            index: i + 1,
            lexeme: token.lexeme.to_string(),
            token: token.resolved_name(dialect).to_string(),
            line: token.line,
            is_error: token.is_error(),
        })
        .collect()
}

/// Reads source text from a file, or from stdin when the path is `-`.
///
/// # Arguments
/// * `path` - The input path; `-` selects stdin
///
/// # Returns
/// * `Result<String>` - The source text or an error
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    if !path.exists() {
        return Err(UbetError::FileOperation(format!(
            "input file does not exist: {}",
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Selects the dialect: CLI flag first, then the config file.
///
/// # Arguments
/// * `flag` - The `--dialect` value, if given
/// * `config` - The loaded configuration
///
/// # Returns
/// * `Result<Dialect>` - The dialect tables or a validation error
pub fn resolve_dialect(flag: Option<&str>, config: &Config) -> Result<Dialect> {
    let name = flag.unwrap_or(&config.dialect);
    let version = name
        .parse()
        .map_err(|e: ubec_lex::ParseDialectError| UbetError::Validation(e.to_string()))?;
    Ok(Dialect::for_version(version))
}

/// Makes a lexeme one-line-safe for table cells.
///
/// Multi-line comment and string lexemes keep their newlines in the
/// token; in a table cell they must stay on one row.
pub fn escape_lexeme(lexeme: &str) -> String {
    lexeme
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
        .replace('\r', "\\r")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ubec_lex::scan;

    #[test]
    fn test_records_preserve_order_and_index() {
        let dialect = Dialect::extended();
        let tokens = scan("int a = 10;", &dialect);
        let rows = records(&tokens, &dialect);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].lexeme, "int");
        assert_eq!(rows[0].token, "Keyword");
        assert_eq!(rows[2].token, "equal_sign");
        assert_eq!(rows[4].token, "semicolon");
    }

    #[test]
    fn test_records_flag_error_rows() {
        let dialect = Dialect::extended();
        let tokens = scan("\"open", &dialect);
        let rows = records(&tokens, &dialect);

        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_error);
        assert_eq!(rows[0].token, "LEXICAL_ERROR");
    }

    #[test]
    fn test_resolve_dialect_flag_wins() {
        let config = Config {
            dialect: "extended".to_string(),
            ..Config::default()
        };
        let dialect = resolve_dialect(Some("classic"), &config).unwrap();
        assert_eq!(dialect.version(), ubec_lex::DialectVersion::Classic);
    }

    #[test]
    fn test_resolve_dialect_falls_back_to_config() {
        let config = Config {
            dialect: "classic".to_string(),
            ..Config::default()
        };
        let dialect = resolve_dialect(None, &config).unwrap();
        assert_eq!(dialect.version(), ubec_lex::DialectVersion::Classic);
    }

    #[test]
    fn test_resolve_dialect_unknown_name() {
        let config = Config::default();
        let result = resolve_dialect(Some("modern"), &config);
        assert!(matches!(result, Err(UbetError::Validation(_))));
    }

    #[test]
    fn test_escape_lexeme() {
        assert_eq!(escape_lexeme("plain"), "plain");
        assert_eq!(escape_lexeme("a\nb"), "a\\nb");
        assert_eq!(escape_lexeme("a\tb"), "a\\tb");
        assert_eq!(escape_lexeme("a\\nb"), "a\\\\nb");
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Path::new("/nonexistent/input.ube"));
        assert!(matches!(result, Err(UbetError::FileOperation(_))));
    }
}
