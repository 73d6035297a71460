//! ubec-lex - Lexical Analyzer for the UBE Teaching Language
//!
//! This crate tokenizes source text written in UBE, a small C-like
//! instructional language, into a flat, ordered sequence of classified
//! tokens, each carrying the 1-based line on which it started.
//!
//! # Overview
//!
//! The scanner is a single-pass, single-lookahead cursor over the source
//! text. It never fails: stray characters become `Unknown` tokens and
//! scanning continues, while an unterminated block comment or string
//! literal becomes a single terminal `LEXICAL_ERROR` token carrying the
//! unconsumed remainder of the input, after which the scan stops. Callers
//! distinguish success from failure by inspecting the sequence: a failed
//! scan ends in exactly one `LEXICAL_ERROR` token.
//!
//! # Example Usage
//!
//! ```
//! use ubec_lex::{scan, Dialect, TokenKind};
//!
//! let dialect = Dialect::extended();
//! let tokens = scan("int a = 10;", &dialect);
//!
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[0].lexeme, "int");
//! assert_eq!(tokens[2].resolved_name(&dialect), "equal_sign");
//!
//! // Or pull tokens one at a time
//! let mut scanner = ubec_lex::Scanner::new("a + b", &dialect);
//! while let Some(token) = scanner.next_token() {
//!     println!("{token}");
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and kind definitions
//! - [`dialect`] - Dialect tables and the word classifier
//! - [`scanner`] - The scanning engine
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Dialects
//!
//! The tables the scanner consults (keyword set, reserved-word set,
//! operator/punctuation name map, multi-character operator candidates,
//! single-character operator set, punctuation set, word-start policy)
//! are bundled into an immutable [`Dialect`] value chosen at call time.
//! Two versions are built in:
//!
//! - **Extended** (current): punctuation includes `:` `.` `#` `?` `_`;
//!   reserved words are `attach`, `bond`, `cast`, `continue`, `detach`,
//!   `main`, `unbond`; a lone `_` is the `underscore` punctuation mark.
//! - **Classic** (earlier): punctuation is `( ) { } [ ] ; ,`; `main` is
//!   the only reserved word; `_` may start a word.
//!
//! # Token Categories
//!
//! `Keyword`, `Reserved_Word`, `Identifier`, `Int_literal`,
//! `String_literal`, `Comment`, `Operator`, `Punctuation`, `Unknown`, and
//! the terminal `LEXICAL_ERROR`. Operator and punctuation tokens store
//! only the coarse category; the semantic name (`plus_op`, `semicolon`,
//! ...) is resolved on demand through the dialect.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod dialect;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use dialect::{Dialect, DialectVersion, ParseDialectError, WordClass};
pub use scanner::{scan, Scanner};
pub use token::{Token, TokenKind};
