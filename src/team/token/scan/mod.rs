//! The sub-scanners the [lexer](super::lexer) dispatches to.
//!
//! Each scanner owns one lexical category end-to-end, including its error
//! reporting and recovery. They share nothing but the [`Cursor`](super::cursor::Cursor)
//! they are handed, and are only entered when the dispatcher has seen the
//! character that starts their category.
pub mod comment;
pub mod identifier;
pub mod number;
pub mod operator;
pub mod string;
pub mod word;

use crate::team::token::tokens::Token;

/// Outcome of a scanner that may decline the input.
#[derive(Debug, PartialEq, Eq)]
#[expect(clippy::exhaustive_enums, reason = "a scanner either matches or it does not.")]
pub enum Attempt {
    /// The scanner claimed the input and produced a token.
    Matched(Token),
    /// The input is not in this scanner's category. Nothing was consumed.
    NotApplicable,
}

/// Outcome of scanning input that starts with `/`.
#[derive(Debug, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the dispatcher must handle every outcome of a slash."
)]
pub enum Slash {
    /// A division operator, or an unterminated block comment.
    Token(Token),
    /// A complete comment was skipped; it produces no token.
    Comment,
}
