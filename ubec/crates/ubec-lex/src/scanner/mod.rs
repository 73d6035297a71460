//! Scanner module.
//!
//! This module organizes the scanning engine into smaller, focused
//! components:
//! - `core` - Main Scanner struct and per-position dispatch
//! - `comment` - Line and block comment scanning
//! - `string` - String literal scanning
//! - `number` - Integer literal scanning
//! - `word` - Word scanning and keyword/reserved-word classification
//! - `symbol` - Operator, punctuation, and fallback scanning

mod comment;
mod core;
mod number;
mod string;
mod symbol;
mod word;

pub use self::core::Scanner;

use crate::dialect::Dialect;
use crate::token::Token;

/// Scans the entire source text into an ordered token sequence.
///
/// This is the sole batch entry point. It never fails: malformed input
/// surfaces as tokens (`Unknown` for stray characters, a single terminal
/// `LEXICAL_ERROR` for an unterminated block comment or string literal),
/// and the scan always terminates.
///
/// # Example
///
/// ```
/// use ubec_lex::{scan, Dialect, TokenKind};
///
/// let dialect = Dialect::extended();
/// let tokens = scan("int a = 10;", &dialect);
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens[0].lexeme, "int");
/// ```
pub fn scan<'src>(source: &'src str, dialect: &Dialect) -> Vec<Token<'src>> {
    Scanner::new(source, dialect).collect()
}
