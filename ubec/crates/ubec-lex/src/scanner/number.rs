//! Integer literal scanning.

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl<'src, 'd> Scanner<'src, 'd> {
    /// Scans an integer literal: one or more ASCII digits.
    ///
    /// The language has no radix prefixes, signs, or fractional forms; a
    /// following letter simply starts the next token, so `123abc` scans as
    /// an integer literal followed by a word.
    pub(crate) fn scan_int_literal(&mut self) -> Token<'src> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        self.token(TokenKind::IntLiteral)
    }
}
