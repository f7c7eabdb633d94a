//! Encapsulates all behaviour necessary to lex team-language source code.
//!
//! [`Lexer::next_token`] skips whitespace, looks at a single character and
//! hands the rest to exactly one of the [sub-scanners](super::scan). Comments
//! are skipped inside that same loop, so any number of them in a row costs
//! constant stack depth.
//!
//! Lexing never fails as a whole. Malformed input becomes an `ERROR` token
//! whose lexeme describes the problem, and scanning resumes right after it:
//!
//! ```rust
//! use teamlex::{tokenize, TokenKind};
//!
//! let kinds = tokenize("134 ! $oops\n\n5.")
//!     .iter()
//!     .map(|token| (token.kind(), token.lexeme().to_owned()))
//!     .collect::<Vec<_>>();
//! assert_eq!(kinds, [
//!     (TokenKind::Integer, "134".to_owned()),
//!     (TokenKind::Error, "!".to_owned()),
//!     (TokenKind::Error, "unterminated string".to_owned()),
//!     (TokenKind::Error, "malformed float: 5.".to_owned()),
//!     (TokenKind::EndOfInput, "<EOF>".to_owned()),
//! ]);
//! ```
use core::iter::FusedIterator;

use thiserror::Error;
use tracing::{debug, trace};

use crate::team::config::LexerConfig;
use crate::team::token::cursor::{Cursor, is_digit, is_letter};
use crate::team::token::scan::{Attempt, Slash, comment, identifier, number, operator, string, word};
use crate::team::token::tokens::{Token, TokenKind};
use crate::team::types::Location;

/// Everything that can be wrong with a piece of input.
///
/// These never escape the lexer as Rust errors. Each one is turned into an
/// `ERROR` token whose lexeme is the error's [`Display`](core::fmt::Display) output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LexError {
    /// A character no scanner accepts.
    #[error("{0}")]
    UnknownCharacter(char),
    /// `!` without a following `=`.
    #[error("!")]
    BareBang,
    /// A `.` that is followed by neither digits nor an exponent.
    #[error(".")]
    BareDot,
    /// A run of letters that is not a keyword.
    #[error("unknown word: {0}")]
    UnknownWord(String),
    /// A number with two consecutive dots.
    #[error("malformed number: {0}")]
    MalformedNumber(String),
    /// A number with a dot but no fraction digits.
    #[error("malformed float: {0}")]
    MalformedFloat(String),
    /// An exponent marker without digits, or without a mantissa.
    #[error("bad exponent: {0}")]
    BadExponent(String),
    /// The two characters `\n` inside a string.
    #[error("string contains forbidden \\n")]
    ForbiddenEscape,
    /// A string cut short by a newline or the end of input.
    #[error("unterminated string")]
    UnterminatedString,
    /// A block comment still open at the end of input.
    #[error("unterminated comment")]
    UnterminatedComment,
}

impl LexError {
    /// Builds the `ERROR` token reporting this error at `start`.
    #[must_use]
    #[inline]
    pub fn into_token(self, start: Location) -> Token {
        Token::new(TokenKind::Error, self.to_string(), start)
    }
}

/// Scans one source buffer into tokens.
///
/// A lexer is driven by a single caller, one token at a time. Once it has
/// returned the `EOF` token, every further call to [`next_token`](Lexer::next_token)
/// returns another `EOF` token at the same location.
#[derive(Clone, Debug)]
pub struct Lexer {
    /// Scan position in the source buffer.
    cursor: Cursor,
    /// Policies for input outside the core language.
    config: LexerConfig,
    /// Whether the iterator already yielded the `EOF` token.
    finished: bool,
}

impl Lexer {
    /// Creates a lexer over `source` with the default configuration.
    #[must_use]
    #[inline]
    pub fn new(source: &str) -> Self {
        Lexer::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer over `source`.
    #[must_use]
    #[inline]
    pub fn with_config(source: &str, config: LexerConfig) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            config,
            finished: false,
        }
    }

    /// Lexes the next token, advancing past it.
    ///
    /// In case of an error, the offending characters stay consumed, so that
    /// lexing can continue past the error.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(%token, "scanned");
        token
    }

    /// Location of the next unconsumed character.
    #[must_use]
    #[inline]
    pub const fn location(&self) -> Location {
        self.cursor.location()
    }

    /// The dispatch loop. Iterates only when a comment or skipped punctuation
    /// produced no token.
    fn scan_token(&mut self) -> Token {
        let cursor = &mut self.cursor;
        loop {
            cursor.skip_whitespace();
            let start = cursor.location();
            if cursor.at_end() {
                return Token::end_of_input(start);
            }

            match cursor.peek() {
                '/' => match comment::scan_slash(cursor, start) {
                    Slash::Token(token) => return token,
                    Slash::Comment => {}
                },
                '$' => return string::scan_string(cursor, start),
                // Team prefixes and plain numbers share the leading `1`.
                '1' => {
                    return match identifier::try_scan_identifier(cursor, start) {
                        Attempt::Matched(token) => token,
                        Attempt::NotApplicable => number::scan_number(cursor, start),
                    };
                }
                c if is_letter(c) => return word::scan_word(cursor, start),
                c if is_digit(c) || c == '.' => return number::scan_number(cursor, start),
                '+' | '-' | '=' | '*' | '<' | '>' | '!' => {
                    return operator::scan_operator(cursor, start);
                }
                c if self.config.punctuation.skips(c) => {
                    cursor.advance();
                }
                c => {
                    cursor.advance();
                    debug!(%start, ?c, "unknown character");
                    return LexError::UnknownCharacter(c).into_token(start);
                }
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including `EOF`, then `None`.
    #[inline]
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_end_of_input();
        Some(token)
    }
}

impl FusedIterator for Lexer {}

/// Tokenizes the given source code into the complete token stream, ending
/// with exactly one `EOF` token.
///
/// Malformed input shows up as `ERROR` tokens inside the stream; it is up to
/// the caller whether to proceed with such a stream.
#[inline]
pub fn tokenize<S: AsRef<str>>(source: S) -> Vec<Token> {
    tokenize_with(source, LexerConfig::default())
}

/// Like [`tokenize`], with an explicit configuration.
#[inline]
#[tracing::instrument(level = "debug", skip_all, fields(chars = source.as_ref().chars().count()))]
pub fn tokenize_with<S: AsRef<str>>(source: S, config: LexerConfig) -> Vec<Token> {
    let tokens = Lexer::with_config(source.as_ref(), config).collect::<Vec<_>>();
    debug!(
        tokens = tokens.len(),
        errors = tokens.iter().filter(|token| token.is_error()).count(),
        "tokenized"
    );
    tokens
}
