//! Word scanning and classification.
//!
//! A word starts with a word-start character (per the active dialect) and
//! continues through ASCII letters, digits, and underscores. The finished
//! lexeme is classified against the dialect's keyword and reserved-word
//! sets.

use crate::scanner::Scanner;
use crate::token::Token;

impl<'src, 'd> Scanner<'src, 'd> {
    /// Scans a word and classifies it as a keyword, reserved word, or
    /// identifier.
    pub(crate) fn scan_word(&mut self) -> Token<'src> {
        self.cursor.advance();
        while self.dialect.is_word_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let lexeme = self.cursor.slice_from(self.token_start);
        let class = self.dialect.classify_word(lexeme);

        self.token(class.token_kind())
    }
}
