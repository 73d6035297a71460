//! Dialect tables and the token classifier.
//!
//! A [`Dialect`] bundles every table the scanner consults: the
//! operator/punctuation name map, the keyword and reserved-word sets, the
//! multi-character operator candidates, the single-character operator set,
//! the punctuation set, and the word-start policy. The bundle is built
//! once, never mutated during a scan, and passed to the scanner by
//! reference, so alternate dialects are configuration values rather than
//! code paths.
//!
//! Two versions are built in. [`Dialect::extended`] is the current table
//! set, with the full punctuation roster (`:` `.` `#` `?` `_`) and the
//! reserved words `attach`, `bond`, `cast`, `continue`, `detach`, `main`,
//! `unbond`. [`Dialect::classic`] is the earlier table set: punctuation is
//! limited to the bracket/separator marks, `main` is the only reserved
//! word, and `_` is a legal word-start character instead of a punctuation
//! mark. Operator tables are identical in both.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::token::TokenKind;

/// Names for every operator and punctuation symbol, in display order.
const SYMBOL_NAMES: &[(&str, &str)] = &[
    ("+", "plus_op"),
    ("-", "sub_op"),
    ("*", "mul_op"),
    ("/", "div_op"),
    ("%", "mod_op"),
    ("=", "equal_sign"),
    ("==", "equality_op"),
    ("!=", "not_equal_op"),
    ("!", "not_operator"),
    ("<", "lesser_than_op"),
    (">", "greater_than_op"),
    ("<=", "lesser_than_or_eq_op"),
    (">=", "greater_than_or_eq_op"),
    ("&&", "and_op"),
    ("||", "or_op"),
    ("++", "inc_op"),
    ("--", "dec_op"),
    ("+=", "plus_assign"),
    ("-=", "sub_assign"),
    ("*=", "mul_assign"),
    ("/=", "div_assign"),
    (";", "semicolon"),
    (",", "comma"),
    (":", "colon"),
    (".", "dot"),
    ("#", "hash"),
    ("?", "question_mark"),
    ("_", "underscore"),
    ("(", "left_paren"),
    (")", "right_paren"),
    ("{", "left_brace"),
    ("}", "right_brace"),
    ("[", "left_bracket"),
    ("]", "right_bracket"),
    ("&", "bitwise_and"),
    ("|", "bitwise_or"),
    ("^", "bitwise_xor"),
    ("~", "bitwise_complement"),
    ("<<", "bitwise_left_shift"),
    (">>", "bitwise_right_shift"),
];

/// Keywords of the language. Identical in both dialect versions.
const KEYWORDS: &[&str] = &[
    "break", "case", "char", "const", "default", "do", "double", "else", "float", "for", "if",
    "int", "printf", "return", "scanf", "struct", "void", "while",
];

/// Reserved words of the extended dialect.
const RESERVED_WORDS_EXTENDED: &[&str] =
    &["attach", "bond", "cast", "continue", "detach", "main", "unbond"];

/// Reserved words of the classic dialect.
const RESERVED_WORDS_CLASSIC: &[&str] = &["main"];

/// Multi-character operator candidates. The constructor length-sorts
/// these, so authoring order is irrelevant to longest-match correctness.
const MULTI_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "<<", ">>",
];

/// Single-character operators. Identical in both dialect versions.
const SINGLE_CHAR_OPERATORS: &[char] =
    &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~'];

/// Punctuation of the extended dialect.
const PUNCTUATION_EXTENDED: &[char] =
    &['(', ')', '{', '}', '[', ']', ';', ',', ':', '.', '#', '?', '_'];

/// Punctuation of the classic dialect.
const PUNCTUATION_CLASSIC: &[char] = &['(', ')', '{', '}', '[', ']', ';', ','];

/// Symbols the classic dialect has no name-map entry for.
const CLASSIC_UNNAMED_SYMBOLS: &[&str] = &[":", ".", "#", "?", "_"];

/// Identifies one of the built-in dialect versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DialectVersion {
    /// The earlier table set: bracket/separator punctuation only, `main`
    /// as the sole reserved word, `_` starts a word.
    Classic,
    /// The current table set: extended punctuation and reserved words,
    /// `_` is the `underscore` punctuation mark.
    #[default]
    Extended,
}

impl DialectVersion {
    /// Returns the lowercase name of this version.
    pub fn as_str(self) -> &'static str {
        match self {
            DialectVersion::Classic => "classic",
            DialectVersion::Extended => "extended",
        }
    }
}

impl fmt::Display for DialectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a dialect name cannot be recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown dialect `{0}` (expected `classic` or `extended`)")]
pub struct ParseDialectError(pub String);

impl FromStr for DialectVersion {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(DialectVersion::Classic),
            "extended" => Ok(DialectVersion::Extended),
            _ => Err(ParseDialectError(s.to_string())),
        }
    }
}

/// The classification of an identifier-shaped lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordClass {
    /// Member of the keyword set.
    Keyword,
    /// Member of the reserved-word set.
    Reserved,
    /// Any other word.
    Identifier,
}

impl WordClass {
    /// Maps the classification to the token kind it produces.
    pub fn token_kind(self) -> TokenKind {
        match self {
            WordClass::Keyword => TokenKind::Keyword,
            WordClass::Reserved => TokenKind::ReservedWord,
            WordClass::Identifier => TokenKind::Identifier,
        }
    }
}

/// The immutable lookup tables for one dialect version.
///
/// Built once (typically at program start), never mutated during a scan,
/// and shared by reference across any number of concurrent scans.
pub struct Dialect {
    version: DialectVersion,
    symbol_names: IndexMap<&'static str, &'static str>,
    keywords: FxHashSet<&'static str>,
    reserved_words: FxHashSet<&'static str>,
    multi_char_operators: Vec<&'static str>,
    single_char_operators: FxHashSet<char>,
    punctuation: FxHashSet<char>,
    underscore_starts_word: bool,
}

impl Dialect {
    /// Builds the current (extended) dialect tables.
    pub fn extended() -> Self {
        Self::build(DialectVersion::Extended)
    }

    /// Builds the earlier (classic) dialect tables.
    pub fn classic() -> Self {
        Self::build(DialectVersion::Classic)
    }

    /// Builds the tables for the given version.
    pub fn for_version(version: DialectVersion) -> Self {
        Self::build(version)
    }

    fn build(version: DialectVersion) -> Self {
        let extended = version == DialectVersion::Extended;

        let symbol_names: IndexMap<&str, &str> = SYMBOL_NAMES
            .iter()
            .filter(|(symbol, _)| extended || !CLASSIC_UNNAMED_SYMBOLS.contains(symbol))
            .copied()
            .collect();

        let reserved: &[&str] = if extended {
            RESERVED_WORDS_EXTENDED
        } else {
            RESERVED_WORDS_CLASSIC
        };
        let punctuation: &[char] = if extended {
            PUNCTUATION_EXTENDED
        } else {
            PUNCTUATION_CLASSIC
        };

        // Longest candidates first, so a prefix of a longer operator can
        // never shadow it regardless of authoring order above.
        let mut multi_char_operators = MULTI_CHAR_OPERATORS.to_vec();
        multi_char_operators.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        Self {
            version,
            symbol_names,
            keywords: KEYWORDS.iter().copied().collect(),
            reserved_words: reserved.iter().copied().collect(),
            multi_char_operators,
            single_char_operators: SINGLE_CHAR_OPERATORS.iter().copied().collect(),
            punctuation: punctuation.iter().copied().collect(),
            underscore_starts_word: !extended,
        }
    }

    /// Returns which version these tables belong to.
    pub fn version(&self) -> DialectVersion {
        self.version
    }

    /// Looks up the semantic name of an operator or punctuation lexeme.
    pub fn symbol_name(&self, lexeme: &str) -> Option<&'static str> {
        self.symbol_names.get(lexeme).copied()
    }

    /// Resolves the display name for a token of the given kind and lexeme.
    ///
    /// `Operator` and `Punctuation` lexemes resolve through the name map;
    /// an unmapped symbol and every other kind resolve to the coarse kind
    /// name. Pure and total.
    pub fn resolve_name(&self, kind: TokenKind, lexeme: &str) -> &'static str {
        match kind {
            TokenKind::Operator | TokenKind::Punctuation => {
                self.symbol_name(lexeme).unwrap_or(kind.as_str())
            }
            _ => kind.as_str(),
        }
    }

    /// Classifies an identifier-shaped lexeme.
    ///
    /// Membership is exact and case-sensitive, checked in priority order:
    /// keyword set first, then reserved-word set, otherwise identifier.
    pub fn classify_word(&self, lexeme: &str) -> WordClass {
        if self.keywords.contains(lexeme) {
            WordClass::Keyword
        } else if self.reserved_words.contains(lexeme) {
            WordClass::Reserved
        } else {
            WordClass::Identifier
        }
    }

    /// Returns true if `c` may begin a word in this dialect.
    pub fn is_word_start(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || (c == '_' && self.underscore_starts_word)
    }

    /// Returns true if `c` may continue a word.
    ///
    /// Both captured dialect versions allow `_` inside a word, even the
    /// one that treats a lone `_` as punctuation.
    pub fn is_word_continue(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// Returns true if `c` is a single-character operator.
    pub fn is_single_char_operator(&self, c: char) -> bool {
        self.single_char_operators.contains(&c)
    }

    /// Returns true if `c` is a punctuation mark in this dialect.
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    /// The multi-character operator candidates, longest first.
    pub fn multi_char_operators(&self) -> &[&'static str] {
        &self.multi_char_operators
    }

    /// The single-character operators, in display order.
    pub fn single_char_operators(&self) -> impl Iterator<Item = char> + '_ {
        SINGLE_CHAR_OPERATORS.iter().copied()
    }

    /// The punctuation marks of this dialect, in display order.
    pub fn punctuation(&self) -> impl Iterator<Item = char> + '_ {
        let extended = self.version == DialectVersion::Extended;
        let marks: &[char] = if extended {
            PUNCTUATION_EXTENDED
        } else {
            PUNCTUATION_CLASSIC
        };
        marks.iter().copied()
    }

    /// The keyword set, in display order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        KEYWORDS.iter().copied()
    }

    /// The reserved-word set of this dialect, in display order.
    pub fn reserved_words(&self) -> impl Iterator<Item = &'static str> + '_ {
        let words: &[&str] = match self.version {
            DialectVersion::Extended => RESERVED_WORDS_EXTENDED,
            DialectVersion::Classic => RESERVED_WORDS_CLASSIC,
        };
        words.iter().copied()
    }

    /// The symbol-name map entries, in insertion (display) order.
    pub fn symbol_names(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.symbol_names.iter().map(|(&sym, &name)| (sym, name))
    }

    /// Whether a lone `_` begins a word (classic) or is the `underscore`
    /// punctuation mark (extended).
    pub fn underscore_starts_word(&self) -> bool {
        self.underscore_starts_word
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::extended()
    }
}
