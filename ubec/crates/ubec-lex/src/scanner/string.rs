//! String literal scanning.
//!
//! Strings run from the opening quote to the next `"` with no escape
//! processing; a quote always closes. Newlines are legal inside a string
//! and bump the line counter while the token keeps its starting line.

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl<'src, 'd> Scanner<'src, 'd> {
    /// Scans a string literal (`"…"`), quotes included in the lexeme.
    ///
    /// If the closing quote never appears, the rest of the input is
    /// consumed and a terminal `LEXICAL_ERROR` token carries it as lexeme,
    /// tagged with the line on which the string opened.
    pub(crate) fn scan_string(&mut self) -> Token<'src> {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return self.error_token();
            }

            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == '"' {
                return self.token(TokenKind::StringLiteral);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::scanner::scan;
    use crate::token::TokenKind;

    #[test]
    fn test_simple_string() {
        let dialect = Dialect::extended();
        let tokens = scan("\"hello\"", &dialect);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, "\"hello\"");
    }

    #[test]
    fn test_empty_string() {
        let dialect = Dialect::extended();
        let tokens = scan("\"\"", &dialect);
        assert_eq!(tokens[0].lexeme, "\"\"");
    }

    #[test]
    fn test_no_escape_processing() {
        // A backslash does not escape the quote; the first `"` closes.
        let dialect = Dialect::extended();
        let tokens = scan(r#""a\" b"#, &dialect);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, r#""a\""#);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "b");
    }

    #[test]
    fn test_multi_line_string_counts_lines() {
        let dialect = Dialect::extended();
        let tokens = scan("\"a\nb\" x", &dialect);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, "\"a\nb\"");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let dialect = Dialect::extended();
        let tokens = scan("\"abc", &dialect);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LexicalError);
        assert_eq!(tokens[0].lexeme, "\"abc");
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn test_unterminated_string_after_tokens() {
        let dialect = Dialect::extended();
        let tokens = scan("int x = \"oops", &dialect);
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].kind, TokenKind::LexicalError);
        assert_eq!(tokens[3].lexeme, "\"oops");
    }

    #[test]
    fn test_lone_quote_is_error() {
        let dialect = Dialect::extended();
        let tokens = scan("\"", &dialect);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LexicalError);
        assert_eq!(tokens[0].lexeme, "\"");
    }

    #[test]
    fn test_adjacent_strings() {
        let dialect = Dialect::extended();
        let tokens = scan("\"a\"\"b\"", &dialect);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "\"a\"");
        assert_eq!(tokens[1].lexeme, "\"b\"");
    }
}
