//! Comment scanning.
//!
//! Line comments run to the end of the line; the terminating newline is
//! left in the input so the dispatch loop can count it. Block comments may
//! span lines and, when unterminated, end the scan with a single terminal
//! error token.

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl<'src, 'd> Scanner<'src, 'd> {
    /// Scans a line comment (`//…`).
    ///
    /// Consumes through, but excluding, the next newline or end of input
    /// and emits a `Comment` token for the span. Leaving the newline
    /// unconsumed keeps the line counter in the hands of the dispatch
    /// loop.
    pub(crate) fn scan_line_comment(&mut self) -> Token<'src> {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }

        self.token(TokenKind::Comment)
    }

    /// Scans a block comment (`/*…*/`).
    ///
    /// Consumes from the opening delimiter until the first `*/`. The
    /// opener's own `*` may serve as the first character of the closer,
    /// so `/*/` is a complete comment. Newlines inside bump the line
    /// counter while the token keeps its starting line.
    ///
    /// If the closer never appears, the rest of the input is consumed and
    /// a terminal `LEXICAL_ERROR` token carries it as lexeme.
    pub(crate) fn scan_block_comment(&mut self) -> Token<'src> {
        self.cursor.advance();
        self.cursor.advance();

        // The opener's star participates in the close check.
        let mut prev = '*';
        loop {
            if self.cursor.is_at_end() {
                return self.error_token();
            }

            let c = self.cursor.current_char();
            if prev == '*' && c == '/' {
                self.cursor.advance();
                return self.token(TokenKind::Comment);
            }

            prev = c;
            self.cursor.advance();
        }
    }
}
