//! Edge case tests for ubec-lex

#[cfg(test)]
mod tests {
    use crate::{scan, Dialect, Token, TokenKind};

    fn dialect() -> &'static Dialect {
        use std::sync::OnceLock;
        static DIALECT: OnceLock<Dialect> = OnceLock::new();
        DIALECT.get_or_init(Dialect::extended)
    }

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        scan(source, dialect())
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme.len(), 10000);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("int char struct");
        assert!(t.iter().all(|x| x.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.len(), 6);
        assert!(t.iter().all(|x| x.kind == TokenKind::Punctuation));
    }

    #[test]
    fn test_edge_consecutive_newlines() {
        let t = lex_all("a\n\n\nb");
        assert_eq!(t[0].line, 1);
        assert_eq!(t[1].line, 4);
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("int\tx\n=\n1");
        assert_eq!(t.len(), 4);
        assert_eq!(t[3].line, 4);
    }

    #[test]
    fn test_edge_comment_between_tokens() {
        let t = lex_all("a/*x*/b");
        assert_eq!(t.len(), 3);
        assert_eq!(t[0].lexeme, "a");
        assert_eq!(t[1].kind, TokenKind::Comment);
        assert_eq!(t[2].lexeme, "b");
    }

    #[test]
    fn test_edge_line_comment_containing_block_opener() {
        let t = lex_all("// /* still a line comment\nx");
        assert_eq!(t[0].kind, TokenKind::Comment);
        assert_eq!(t[1].lexeme, "x");
    }

    #[test]
    fn test_edge_block_comment_containing_line_comment() {
        let t = lex_all("/* // inner */x");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].kind, TokenKind::Comment);
        assert_eq!(t[0].lexeme, "/* // inner */");
    }

    #[test]
    fn test_edge_string_containing_comment_opener() {
        let t = lex_all("\"//not a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::StringLiteral);
    }

    #[test]
    fn test_edge_unknown_then_valid() {
        let t = lex_all("@int");
        assert_eq!(t[0].kind, TokenKind::Unknown);
        assert_eq!(t[1].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_edge_crlf_line_endings_surface_cr() {
        // '\r' matches no rule; the '\n' still advances the line.
        let t = lex_all("a\r\nb");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].kind, TokenKind::Unknown);
        assert_eq!(t[1].lexeme, "\r");
        assert_eq!(t[2].line, 2);
    }

    #[test]
    fn test_edge_operators_without_spaces() {
        let t = lex_all("a+=b<=c");
        let lexemes: Vec<_> = t.iter().map(|x| x.lexeme).collect();
        assert_eq!(lexemes, vec!["a", "+=", "b", "<=", "c"]);
    }

    #[test]
    fn test_edge_shift_then_assign() {
        // `<<=` is not an operator of this language: `<<` wins, `=`
        // follows.
        let t = lex_all("<<=");
        let lexemes: Vec<_> = t.iter().map(|x| x.lexeme).collect();
        assert_eq!(lexemes, vec!["<<", "="]);
    }

    #[test]
    fn test_edge_error_wins_over_trailing_garbage() {
        let t = lex_all("/* open @ $ ~");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::LexicalError);
        assert_eq!(t[0].lexeme, "/* open @ $ ~");
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_lines_are_monotonic() {
        use proptest::prelude::*;

        proptest!(|(input in "[ -~\\t\\n]{0,200}")| {
            let tokens = lex_all(&input);
            for window in tokens.windows(2) {
                prop_assert!(window[0].line <= window[1].line);
            }
        });
    }

    #[test]
    fn test_property_scan_is_total_and_pure() {
        use proptest::prelude::*;

        proptest!(|(input in "[ -~\\t\\n]{0,200}")| {
            // Totality: both calls return; purity: identical output.
            let first = lex_all(&input);
            let second = lex_all(&input);
            prop_assert_eq!(first, second);
        });
    }

    #[test]
    fn test_property_at_most_one_error_and_it_is_last() {
        use proptest::prelude::*;

        proptest!(|(input in "[ -~\\t\\n]{0,200}")| {
            let tokens = lex_all(&input);
            let errors = tokens.iter().filter(|t| t.is_error()).count();
            prop_assert!(errors <= 1);
            if errors == 1 {
                prop_assert!(tokens.last().unwrap().is_error());
            }
        });
    }

    #[test]
    fn test_property_every_character_accounted_for() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9+\\-*/<>=;,(){} \t\n\"]{0,200}")| {
            let tokens = lex_all(&input);
            let token_bytes: usize = tokens.iter().map(|t| t.lexeme.len()).sum();
            let skipped = input
                .chars()
                .filter(|c| matches!(c, ' ' | '\t' | '\n'))
                .count();
            if tokens.last().map_or(false, |t| t.is_error()) {
                // Whitespace inside the error remainder was not skipped.
                prop_assert!(token_bytes + skipped >= input.len());
            } else {
                // String and comment lexemes contain whitespace of their
                // own, so the partition is exact only without them.
                if !input.contains('"') && !input.contains('/') {
                    prop_assert_eq!(token_bytes + skipped, input.len());
                }
            }
        });
    }

    #[test]
    fn test_property_words_scan_whole() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z][a-zA-Z0-9_]{0,50}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            let kind = tokens[0].kind;
            prop_assert!(matches!(
                kind,
                TokenKind::Keyword | TokenKind::ReservedWord | TokenKind::Identifier
            ));
            prop_assert_eq!(tokens[0].lexeme, input.as_str());
        });
    }

    #[test]
    fn test_property_digit_runs_scan_whole() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,30}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        });
    }

    #[test]
    fn test_property_unterminated_string_is_single_error() {
        use proptest::prelude::*;

        proptest!(|(body in "[a-z \t\n]{0,100}")| {
            let input = format!("\"{body}");
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::LexicalError);
            prop_assert_eq!(tokens[0].lexeme, input.as_str());
        });
    }
}
