//! Token type definitions.
//!
//! A token is a classified unit of lexical output carrying its kind, its
//! exact source lexeme, and the 1-based line on which the lexeme started.

use std::fmt;

use crate::dialect::Dialect;

/// The coarse classification of a token.
///
/// Operator and punctuation tokens store only this coarse category; the
/// semantic name of the matched symbol (e.g. `plus_op`, `semicolon`) is
/// derived on demand from the active [`Dialect`] rather than stored on the
/// token. See [`Token::resolved_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A word from the dialect's keyword set (e.g. `int`, `while`).
    Keyword,
    /// A word from the dialect's reserved-word set (e.g. `main`).
    ReservedWord,
    /// Any other word.
    Identifier,
    /// One or more ASCII digits.
    IntLiteral,
    /// A double-quoted string, quotes included.
    StringLiteral,
    /// A line (`//…`) or block (`/*…*/`) comment, delimiters included.
    Comment,
    /// A single- or multi-character operator.
    Operator,
    /// A punctuation mark.
    Punctuation,
    /// A single character matching no lexical rule. Non-fatal.
    Unknown,
    /// An unterminated block comment or string literal. Always the final
    /// token of its scan; its lexeme is the whole unconsumed remainder.
    LexicalError,
}

impl TokenKind {
    /// Returns the display name of this kind.
    ///
    /// These are the classic table names as rendered in token listings:
    /// `Keyword`, `Reserved_Word`, `Identifier`, `Int_literal`,
    /// `String_literal`, `Comment`, `Operator`, `Punctuation`, `Unknown`,
    /// `LEXICAL_ERROR`.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::ReservedWord => "Reserved_Word",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntLiteral => "Int_literal",
            TokenKind::StringLiteral => "String_literal",
            TokenKind::Comment => "Comment",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Unknown => "Unknown",
            TokenKind::LexicalError => "LEXICAL_ERROR",
        }
    }

    /// Returns true for the terminal error kind.
    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::LexicalError)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token produced by the scanner.
///
/// The lexeme borrows from the scanned source, so tokens are exact
/// zero-copy substrings of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// Coarse classification.
    pub kind: TokenKind,
    /// The exact matched substring of the source.
    pub lexeme: &'src str,
    /// Line on which the lexeme started (1-based).
    pub line: u32,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: &'src str, line: u32) -> Self {
        Self { kind, lexeme, line }
    }

    /// Resolves the semantic display name of this token under a dialect.
    ///
    /// For `Operator` and `Punctuation` tokens this looks the lexeme up in
    /// the dialect's symbol-name map (`"+"` becomes `plus_op`, `";"`
    /// becomes `semicolon`); an unmapped symbol and every other kind fall
    /// back to the coarse kind name.
    ///
    /// # Example
    ///
    /// ```
    /// use ubec_lex::{Dialect, Token, TokenKind};
    ///
    /// let dialect = Dialect::extended();
    /// let token = Token::new(TokenKind::Operator, "=", 1);
    /// assert_eq!(token.resolved_name(&dialect), "equal_sign");
    /// ```
    pub fn resolved_name(&self, dialect: &Dialect) -> &'static str {
        dialect.resolve_name(self.kind, self.lexeme)
    }

    /// Returns true for the terminal error token.
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at line {}", self.kind, self.lexeme, self.line)
    }
}
