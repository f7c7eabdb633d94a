//! Data types representing tokens of the team language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::team::types::Location;
use crate::team::util::map;

/// Keywords in the team language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the keyword set is fixed by the language."
)]
pub enum Keyword {
    // Control flow
    /// `"if"`
    If,
    /// `"else"`
    Else,
    /// `"while"`
    While,
    /// `"return"`
    Return,

    // Declarations
    /// `"func"`
    Func,
}

impl Keyword {
    /// Extract the raw representation as it occurs in the source code.
    #[must_use]
    #[inline]
    pub const fn to_raw(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Return => "return",
            Keyword::Func => "func",
        }
    }

    /// Looks up the keyword spelled exactly as `word`.
    #[must_use]
    #[inline]
    pub fn from_word(word: &str) -> Option<Keyword> {
        KEYWORDS.get(word).copied()
    }
}

/// Lookup table for keywords to distinguish them from unknown words.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    map! {
        "if"     => Keyword::If,
        "else"   => Keyword::Else,
        "while"  => Keyword::While,
        "return" => Keyword::Return,

        "func"   => Keyword::Func,
    }
});

/// The category of a token. The lexeme carries everything else.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled by every consumer and is a breaking change."
)]
pub enum TokenKind {
    /// Team-prefixed identifier such as `134abc` or `104_var`.
    Identifier,
    /// One of the reserved [`Keywords`](Keyword).
    Keyword,
    /// Whole number like `42`.
    Integer,
    /// Floating-point number with a dot and/or an exponent, like `.5` or `2.5e10`.
    Number,
    /// Contents of a `$`-delimited string, delimiters excluded.
    String,
    /// Arithmetic, comparison or assignment operator.
    Operator,
    /// Malformed input; the lexeme describes the problem.
    Error,
    /// End of input. Emitted once at the end of every token stream.
    EndOfInput,
}

impl TokenKind {
    /// The upper-case name used in the canonical token rendering.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Integer => "INTEGER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Error => "ERROR",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of source code, pinned to the location of its first character.
///
/// Tokens are never mutated after the lexer hands them out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Category of this token.
    kind: TokenKind,
    /// Exact source text, or the error description for `Error` tokens.
    lexeme: String,
    /// Where the first character of the token sits.
    location: Location,
}

impl Token {
    /// The lexeme of every [`TokenKind::EndOfInput`] token.
    pub const EOF_LEXEME: &'static str = "<EOF>";

    /// Creates a token of the given kind.
    #[must_use]
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Creates the terminal token of a stream.
    #[must_use]
    #[inline]
    pub fn end_of_input(location: Location) -> Self {
        Token::new(TokenKind::EndOfInput, Token::EOF_LEXEME, location)
    }

    /// Category of this token.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Exact source text of this token, or the error description.
    #[must_use]
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Location of the first character of this token.
    #[must_use]
    #[inline]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// 1-based line of the first character.
    #[must_use]
    #[inline]
    pub const fn line(&self) -> usize {
        self.location.line
    }

    /// 1-based column of the first character.
    #[must_use]
    #[inline]
    pub const fn column(&self) -> usize {
        self.location.col
    }

    /// Whether this token reports malformed input.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Whether this is the terminal token of a stream.
    #[must_use]
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The keyword this token spells, if it is a `Keyword` token.
    #[must_use]
    #[inline]
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_word(&self.lexeme),
            TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Operator
            | TokenKind::Error
            | TokenKind::EndOfInput => None,
        }
    }
}

/// Renders `KIND('lexeme')@line:col`, e.g. `IDENTIFIER('134Alamin')@1:1`.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}('{}')@{}", self.kind, self.lexeme, self.location)
    }
}
