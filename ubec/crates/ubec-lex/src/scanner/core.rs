//! Core scanner implementation.
//!
//! This module contains the main Scanner struct and the per-position
//! dispatch loop. The individual scanning rules live in the sibling
//! modules and are implemented as methods on `Scanner`.

use crate::cursor::Cursor;
use crate::dialect::Dialect;
use crate::token::{Token, TokenKind};

/// The scanning engine.
///
/// A single-pass, single-lookahead scanner over one source text. Each call
/// to [`next_token`](Scanner::next_token) skips insignificant whitespace,
/// then applies the dispatch rules in strict priority order and returns the
/// next token, or `None` once the input is exhausted.
///
/// The scanner holds only transient state (cursor position, current line,
/// the halt flag) and borrows its dialect tables immutably, so independent
/// scanners never interfere, even on separate threads.
///
/// Anomalies never raise: a stray character becomes an `Unknown` token and
/// scanning continues, while an unterminated block comment or string
/// literal becomes a single terminal `LEXICAL_ERROR` token after which the
/// scanner yields nothing more.
pub struct Scanner<'src, 'd> {
    /// Character cursor over the source text.
    pub(crate) cursor: Cursor<'src>,

    /// The dialect tables consulted for classification.
    pub(crate) dialect: &'d Dialect,

    /// Starting byte position of the token being scanned.
    pub(crate) token_start: usize,

    /// Line on which the token being scanned started (1-based).
    pub(crate) token_start_line: u32,

    /// Set once a terminal error token has been emitted.
    halted: bool,
}

impl<'src, 'd> Scanner<'src, 'd> {
    /// Creates a new scanner over the given source text.
    pub fn new(source: &'src str, dialect: &'d Dialect) -> Self {
        Self {
            cursor: Cursor::new(source),
            dialect,
            token_start: 0,
            token_start_line: 1,
            halted: false,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Dispatch order (first match wins): newline, horizontal whitespace,
    /// line comment, block comment, string literal, integer literal, word,
    /// multi-character operator, single-character operator, punctuation,
    /// and finally the single-character `Unknown` fallback. The fallback
    /// always advances the cursor, so every iteration makes progress and
    /// the scan terminates on any finite input.
    ///
    /// After a terminal `LEXICAL_ERROR` token has been returned, every
    /// subsequent call returns `None`.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        if self.halted {
            return None;
        }

        loop {
            if self.cursor.is_at_end() {
                return None;
            }

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            match self.cursor.current_char() {
                // Newlines and horizontal whitespace separate tokens and
                // produce nothing. The cursor bumps the line counter when
                // it steps over '\n'.
                '\n' | ' ' | '\t' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek_next() == '/' => {
                    return Some(self.scan_line_comment());
                }
                '/' if self.cursor.peek_next() == '*' => {
                    return Some(self.scan_block_comment());
                }
                '"' => {
                    return Some(self.scan_string());
                }
                c if c.is_ascii_digit() => {
                    return Some(self.scan_int_literal());
                }
                c if self.dialect.is_word_start(c) => {
                    return Some(self.scan_word());
                }
                _ => {
                    return Some(self.scan_symbol());
                }
            }
        }
    }

    /// Returns true once a terminal error token has been emitted.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Builds a token of the given kind spanning from the token start to
    /// the current cursor position, tagged with the starting line.
    pub(crate) fn token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_start_line,
        )
    }

    /// Builds the terminal `LEXICAL_ERROR` token and halts the scan.
    ///
    /// Callers must already have consumed the rest of the input (so the
    /// lexeme is the full remainder from the opening delimiter and the
    /// line counter reflects every newline inside it).
    pub(crate) fn error_token(&mut self) -> Token<'src> {
        self.halted = true;
        self.token(TokenKind::LexicalError)
    }
}

impl<'src, 'd> Iterator for Scanner<'src, 'd> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
