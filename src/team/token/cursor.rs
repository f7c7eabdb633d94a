//! Character cursor over an immutable source buffer.
//!
//! The cursor is the single source of truth for where scanning is: the
//! absolute offset of the next unconsumed character and its line/column.
//! Reading past the end never fails; it yields [`SENTINEL`] instead, which
//! none of the classifier predicates accept.

use crate::team::types::Location;

/// Returned by every read at or beyond the end of the buffer.
pub const SENTINEL: char = '\0';

/// Snapshot of a cursor's scan position.
///
/// Restoring a snapshot resets offset, line and column together, which is
/// all the backtracking the lexer ever needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Index of the next unconsumed character.
    offset: usize,
    /// Line/column of the character at `offset`.
    location: Location,
}

/// Owns the source buffer and the mutable scan position.
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The whole source, decoded up front.
    chars: Vec<char>,
    /// Where scanning currently is.
    pos: Position,
}

impl Cursor {
    /// Creates a cursor positioned on the first character of `source`.
    #[must_use]
    #[inline]
    pub fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            pos: Position {
                offset: 0,
                location: Location::START,
            },
        }
    }

    /// Whether every character has been consumed.
    #[must_use]
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos.offset >= self.chars.len()
    }

    /// The current character, or [`SENTINEL`] at the end.
    #[must_use]
    #[inline]
    pub fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// The character `k` positions ahead of the current one, or [`SENTINEL`]
    /// if that is past the end.
    #[must_use]
    #[inline]
    pub fn peek_at(&self, k: usize) -> char {
        self.pos
            .offset
            .checked_add(k)
            .and_then(|idx| self.chars.get(idx))
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// Consumes and returns the current character.
    ///
    /// At the end this returns [`SENTINEL`] and leaves the position untouched.
    #[inline]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "offset is bounded by the buffer length; line and column by the offset."
    )]
    pub fn advance(&mut self) -> char {
        let Some(&c) = self.chars.get(self.pos.offset) else {
            return SENTINEL;
        };
        self.pos.offset += 1;
        if c == '\n' {
            self.pos.location.line += 1;
            self.pos.location.col = 1;
        } else {
            self.pos.location.col += 1;
        }
        c
    }

    /// Consumes the current character only if it is `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if !self.at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current character only if it is one of `expected`.
    #[inline]
    pub fn eat_any(&mut self, expected: &[char]) -> bool {
        if !self.at_end() && expected.contains(&self.peek()) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds, returning how many were consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut eaten = 0usize;
        while !self.at_end() && pred(self.peek()) {
            self.advance();
            eaten = eaten.saturating_add(1);
        }
        eaten
    }

    /// Skips spaces, tabs, carriage returns and newlines.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Line/column of the current character.
    #[must_use]
    #[inline]
    pub const fn location(&self) -> Location {
        self.pos.location
    }

    /// Snapshot of the current scan position.
    #[must_use]
    #[inline]
    pub const fn position(&self) -> Position {
        self.pos
    }

    /// Rewinds (or fast-forwards) to a snapshot taken from this cursor.
    #[inline]
    pub fn restore(&mut self, pos: Position) {
        self.pos = pos;
    }

    /// The source text between `start` and the current offset.
    #[must_use]
    #[inline]
    pub fn text_since(&self, start: Position) -> String {
        self.chars
            .get(start.offset..self.pos.offset)
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }
}

/// ASCII letter.
#[must_use]
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII digit.
#[must_use]
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Start of an identifier body.
#[must_use]
#[inline]
pub fn is_letter_or_underscore(c: char) -> bool {
    is_letter(c) || c == '_'
}

/// Continuation of an identifier body.
#[must_use]
#[inline]
pub fn is_letter_digit_or_underscore(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

/// Whitespace separating tokens.
#[must_use]
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
