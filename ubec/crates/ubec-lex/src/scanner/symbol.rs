//! Operator, punctuation, and fallback scanning.
//!
//! Multi-character operators are tried first, from the dialect's
//! length-sorted candidate list, so maximal munch holds structurally.
//! Whatever matches nothing at all becomes a one-character `Unknown`
//! token, which keeps the scan moving forward.

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl<'src, 'd> Scanner<'src, 'd> {
    /// Scans an operator, a punctuation mark, or the `Unknown` fallback.
    pub(crate) fn scan_symbol(&mut self) -> Token<'src> {
        let dialect = self.dialect;

        for op in dialect.multi_char_operators() {
            if self.cursor.starts_with(op) {
                self.cursor.advance_n(op.len());
                return self.token(TokenKind::Operator);
            }
        }

        let c = self.cursor.current_char();
        if dialect.is_single_char_operator(c) {
            self.cursor.advance();
            return self.token(TokenKind::Operator);
        }

        if dialect.is_punctuation(c) {
            self.cursor.advance();
            return self.token(TokenKind::Punctuation);
        }

        self.cursor.advance();
        self.token(TokenKind::Unknown)
    }
}
